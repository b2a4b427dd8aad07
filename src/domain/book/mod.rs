pub mod entity;
pub mod repository;

pub use entity::{Book, BookDetails, NewBook};
pub use repository::BookRepository;
