use crate::domain::errors::DomainResult;
use crate::domain::feed::{FeedPost, FeedPostContent, PostBody};
use crate::domain::values::optional_url;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedPostDto {
    pub id: i64,
    pub body: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<FeedPost> for FeedPostDto {
    fn from(post: FeedPost) -> Self {
        Self {
            id: post.id.into(),
            body: post.content.body.into_inner(),
            image_url: post.content.image_url,
            link_url: post.content.link_url,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FeedPostInput {
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

impl FeedPostInput {
    pub fn into_content(self) -> DomainResult<FeedPostContent> {
        Ok(FeedPostContent {
            body: PostBody::new(self.body)?,
            image_url: optional_url("image_url", self.image_url)?,
            link_url: optional_url("link_url", self.link_url)?,
        })
    }
}
