pub mod cursor;
pub mod entity;
pub mod repository;

pub use cursor::FeedCursor;
pub use entity::{FeedPost, FeedPostContent, NewFeedPost, PostBody};
pub use repository::FeedRepository;
