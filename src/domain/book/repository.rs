use crate::domain::book::entity::{Book, BookDetails, NewBook};
use crate::domain::errors::DomainResult;
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn insert(&self, book: NewBook) -> DomainResult<Book>;
    async fn update(
        &self,
        id: RecordId,
        details: BookDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Book>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Book>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Book>>;
    async fn list(&self) -> DomainResult<Vec<Book>>;
}
