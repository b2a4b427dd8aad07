// src/application/queries/feed.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CursorPage, FeedPostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        feed::{FeedCursor, FeedRepository},
        values::RecordId,
    },
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

pub struct ListFeedQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct FeedQueryService {
    repo: Arc<dyn FeedRepository>,
}

impl FeedQueryService {
    pub fn new(repo: Arc<dyn FeedRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_post(&self, id: i64) -> ApplicationResult<FeedPostDto> {
        let id = RecordId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("feed post not found"))
    }

    pub async fn list_feed(
        &self,
        query: ListFeedQuery,
    ) -> ApplicationResult<CursorPage<FeedPostDto>> {
        let limit = normalize_limit(query.limit);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let (posts, next_cursor) = self.repo.list_page(limit, cursor).await?;
        let items = posts.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}

fn normalize_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}

fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<FeedCursor>> {
    match token {
        Some(value) => match FeedCursor::decode(value) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
            Err(other) => Err(ApplicationError::from(other)),
        },
        None => Ok(None),
    }
}
