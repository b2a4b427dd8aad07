// src/application/queries/restaurants.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::RestaurantDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{restaurant::RestaurantRepository, values::RecordId},
};

pub struct GetRestaurantBySlugQuery {
    pub slug: String,
}

pub struct RestaurantQueryService {
    repo: Arc<dyn RestaurantRepository>,
}

impl RestaurantQueryService {
    pub fn new(repo: Arc<dyn RestaurantRepository>) -> Self {
        Self { repo }
    }

    /// Exact lookup; the requested slug is not normalised first.
    pub async fn get_restaurant_by_slug(
        &self,
        query: GetRestaurantBySlugQuery,
    ) -> ApplicationResult<RestaurantDto> {
        self.repo
            .find_by_slug(&query.slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("restaurant not found"))
    }

    pub async fn get_restaurant(&self, id: i64) -> ApplicationResult<RestaurantDto> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("restaurant not found"))
    }

    pub async fn list_restaurants(&self) -> ApplicationResult<Vec<RestaurantDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
