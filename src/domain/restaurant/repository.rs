use crate::domain::errors::DomainResult;
use crate::domain::restaurant::entity::{NewRestaurant, Restaurant, RestaurantDetails};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn insert(&self, restaurant: NewRestaurant) -> DomainResult<Restaurant>;
    async fn update(
        &self,
        id: RecordId,
        details: RestaurantDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Restaurant>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Restaurant>>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Restaurant>>;
    async fn list(&self) -> DomainResult<Vec<Restaurant>>;
}
