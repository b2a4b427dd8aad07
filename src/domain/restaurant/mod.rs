pub mod entity;
pub mod repository;

pub use entity::{NewRestaurant, Restaurant, RestaurantDetails};
pub use repository::RestaurantRepository;
