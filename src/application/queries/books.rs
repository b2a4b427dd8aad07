// src/application/queries/books.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::BookDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{book::BookRepository, values::RecordId},
};

pub struct GetBookBySlugQuery {
    pub slug: String,
}

pub struct BookQueryService {
    repo: Arc<dyn BookRepository>,
}

impl BookQueryService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    /// Exact lookup; the requested slug is not normalised first.
    pub async fn get_book_by_slug(
        &self,
        query: GetBookBySlugQuery,
    ) -> ApplicationResult<BookDto> {
        self.repo
            .find_by_slug(&query.slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("book not found"))
    }

    pub async fn get_book(&self, id: i64) -> ApplicationResult<BookDto> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("book not found"))
    }

    pub async fn list_books(&self) -> ApplicationResult<Vec<BookDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
