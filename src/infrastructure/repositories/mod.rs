// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_book;
mod postgres_feed;
mod postgres_flat;
mod postgres_inbox;
mod postgres_movie;
mod postgres_restaurant;
mod postgres_slug;
mod postgres_trip;

pub use error::map_sqlx;
pub use postgres_book::PostgresBookRepository;
pub use postgres_feed::PostgresFeedRepository;
pub use postgres_flat::PostgresFlatRepository;
pub use postgres_inbox::{PostgresContactMessageRepository, PostgresSuggestionRepository};
pub use postgres_movie::PostgresMovieRepository;
pub use postgres_restaurant::PostgresRestaurantRepository;
pub use postgres_slug::PostgresSlugRepository;
pub use postgres_trip::PostgresTripRepository;
