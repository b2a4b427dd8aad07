use crate::domain::errors::DomainResult;
use crate::domain::trip::entity::{NewTrip, Trip, TripDetails};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn insert(&self, trip: NewTrip) -> DomainResult<Trip>;
    async fn update(
        &self,
        id: RecordId,
        details: TripDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Trip>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Trip>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Trip>>;
    async fn list(&self) -> DomainResult<Vec<Trip>>;
}
