// src/domain/mod.rs
pub mod book;
pub mod errors;
pub mod feed;
pub mod flat;
pub mod inbox;
pub mod movie;
pub mod restaurant;
pub mod slug;
pub mod trip;
pub mod values;
