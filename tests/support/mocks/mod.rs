// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod records;
pub mod slugs;
pub mod time;

pub use catalog::InMemoryCatalog;
pub use records::{InMemoryFeed, InMemoryFlats, InMemoryInbox};
pub use slugs::{FailingAssign, StaleSlugs};
pub use time::{FixedClock, fixed_now};
