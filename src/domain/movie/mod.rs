// src/domain/movie/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Movie, MovieDetails, NewMovie};
pub use repository::MovieRepository;
