use crate::domain::errors::DomainResult;
use crate::domain::feed::cursor::FeedCursor;
use crate::domain::feed::entity::{FeedPost, FeedPostContent, NewFeedPost};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait FeedRepository: Send + Sync {
    async fn insert(&self, post: NewFeedPost) -> DomainResult<FeedPost>;
    async fn update(
        &self,
        id: RecordId,
        content: FeedPostContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<FeedPost>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<FeedPost>>;
    /// Newest first, strictly after `cursor` when given. Returns the cursor of
    /// the next page when more posts remain.
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<FeedCursor>,
    ) -> DomainResult<(Vec<FeedPost>, Option<FeedCursor>)>;
}
