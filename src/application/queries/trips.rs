// src/application/queries/trips.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::TripDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{trip::TripRepository, values::RecordId},
};

pub struct GetTripBySlugQuery {
    pub slug: String,
}

pub struct TripQueryService {
    repo: Arc<dyn TripRepository>,
}

impl TripQueryService {
    pub fn new(repo: Arc<dyn TripRepository>) -> Self {
        Self { repo }
    }

    /// Exact lookup; the requested slug is not normalised first.
    pub async fn get_trip_by_slug(
        &self,
        query: GetTripBySlugQuery,
    ) -> ApplicationResult<TripDto> {
        self.repo
            .find_by_slug(&query.slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("trip not found"))
    }

    pub async fn get_trip(&self, id: i64) -> ApplicationResult<TripDto> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("trip not found"))
    }

    pub async fn list_trips(&self) -> ApplicationResult<Vec<TripDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
