use crate::domain::errors::DomainResult;
use crate::domain::inbox::contact::{ContactMessage, NewContactMessage};
use crate::domain::inbox::suggestion::{NewSuggestion, Suggestion};
use crate::domain::values::RecordId;
use async_trait::async_trait;

#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn insert(&self, suggestion: NewSuggestion) -> DomainResult<Suggestion>;
    /// Newest first; only unhandled ones when `pending_only`.
    async fn list(&self, pending_only: bool) -> DomainResult<Vec<Suggestion>>;
    async fn mark_handled(&self, id: RecordId) -> DomainResult<Suggestion>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    /// Newest first; only unread ones when `unread_only`.
    async fn list(&self, unread_only: bool) -> DomainResult<Vec<ContactMessage>>;
    async fn mark_read(&self, id: RecordId) -> DomainResult<ContactMessage>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}
