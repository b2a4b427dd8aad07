use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::values::RecordId;
use chrono::{DateTime, Utc};

pub const MAX_POST_LENGTH: usize = 2000;

/// Text of a feed post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_POST_LENGTH {
            return Err(DomainError::Validation(format!(
                "body cannot exceed {MAX_POST_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPostContent {
    pub body: PostBody,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FeedPost {
    pub id: RecordId,
    pub content: FeedPostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFeedPost {
    pub content: FeedPostContent,
    pub created_at: DateTime<Utc>,
}
