// src/application/queries/flats.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::FlatDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        flat::{FlatRepository, FlatStatus},
        values::RecordId,
    },
};

pub struct ListFlatsQuery {
    pub status: Option<String>,
}

pub struct FlatQueryService {
    repo: Arc<dyn FlatRepository>,
}

impl FlatQueryService {
    pub fn new(repo: Arc<dyn FlatRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_flat(&self, id: i64) -> ApplicationResult<FlatDto> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("flat not found"))
    }

    pub async fn list_flats(&self, query: ListFlatsQuery) -> ApplicationResult<Vec<FlatDto>> {
        let status = query
            .status
            .as_deref()
            .map(str::parse::<FlatStatus>)
            .transpose()?;
        let flats = self.repo.list(status).await?;
        Ok(flats.into_iter().map(Into::into).collect())
    }
}
