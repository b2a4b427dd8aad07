pub mod entity;
pub mod repository;

pub use entity::{NewTrip, Trip, TripDetails};
pub use repository::TripRepository;
