// src/application/queries/movies.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::MovieDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{movie::MovieRepository, values::RecordId},
};

pub struct GetMovieBySlugQuery {
    pub slug: String,
}

pub struct MovieQueryService {
    repo: Arc<dyn MovieRepository>,
}

impl MovieQueryService {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    /// Exact lookup; the requested slug is not normalised first.
    pub async fn get_movie_by_slug(
        &self,
        query: GetMovieBySlugQuery,
    ) -> ApplicationResult<MovieDto> {
        self.repo
            .find_by_slug(&query.slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("movie not found"))
    }

    pub async fn get_movie(&self, id: i64) -> ApplicationResult<MovieDto> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("movie not found"))
    }

    pub async fn list_movies(&self) -> ApplicationResult<Vec<MovieDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
