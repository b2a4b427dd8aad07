pub mod entity;
pub mod repository;

pub use entity::{Flat, FlatDetails, FlatStatus, NewFlat};
pub use repository::FlatRepository;
