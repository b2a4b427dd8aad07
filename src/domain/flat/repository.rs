use crate::domain::errors::DomainResult;
use crate::domain::flat::entity::{Flat, FlatDetails, FlatStatus, NewFlat};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait FlatRepository: Send + Sync {
    async fn insert(&self, flat: NewFlat) -> DomainResult<Flat>;
    async fn update(
        &self,
        id: RecordId,
        details: FlatDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Flat>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Flat>>;
    async fn list(&self, status: Option<FlatStatus>) -> DomainResult<Vec<Flat>>;
}
