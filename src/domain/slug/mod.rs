// src/domain/slug/mod.rs
pub mod allocator;
pub mod backfill;
pub mod generator;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use allocator::allocate_unique_slug;
pub use backfill::{BackfillFailure, BackfillReport, SlugBackfill};
pub use generator::generate_slug;
pub use repository::{SlugRepository, UnsluggedRecord};
pub use services::SlugService;
pub use value_objects::{EntityKind, Slug};
