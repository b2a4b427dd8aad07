// src/presentation/http/controllers/mod.rs
pub mod books;
pub mod feed;
pub mod flats;
pub mod inbox;
pub mod movies;
pub mod restaurants;
pub mod trips;
