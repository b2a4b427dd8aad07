use crate::domain::errors::DomainResult;
use crate::domain::movie::entity::{Movie, MovieDetails, NewMovie};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn insert(&self, movie: NewMovie) -> DomainResult<Movie>;
    async fn update(
        &self,
        id: RecordId,
        details: MovieDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Movie>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Movie>>;
    /// Exact, case-sensitive match on the stored slug.
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Movie>>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Movie>>;
}
