// src/domain/inbox/mod.rs
pub mod contact;
pub mod repository;
pub mod suggestion;

pub use contact::{ContactMessage, EmailAddress, NewContactMessage};
pub use repository::{ContactMessageRepository, SuggestionRepository};
pub use suggestion::{NewSuggestion, Suggestion, SuggestionCategory};
