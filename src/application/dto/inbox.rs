use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::inbox::{
    ContactMessage, EmailAddress, NewContactMessage, NewSuggestion, Suggestion, SuggestionCategory,
};
use crate::domain::values::{Title, optional_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionDto {
    pub id: i64,
    pub category: SuggestionCategory,
    pub title: String,
    pub author_name: Option<String>,
    pub message: Option<String>,
    pub handled: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Suggestion> for SuggestionDto {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            id: suggestion.id.into(),
            category: suggestion.category,
            title: suggestion.title.into_inner(),
            author_name: suggestion.author_name,
            message: suggestion.message,
            handled: suggestion.handled,
            created_at: suggestion.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuggestionInput {
    pub category: SuggestionCategory,
    pub title: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SuggestionInput {
    pub fn into_new(self, created_at: DateTime<Utc>) -> DomainResult<NewSuggestion> {
        Ok(NewSuggestion {
            category: self.category,
            title: Title::new("title", self.title)?,
            author_name: optional_text(self.author_name),
            message: optional_text(self.message),
            created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.into(),
            name: message.name.into_inner(),
            email: message.email.into_inner(),
            message: message.message,
            read: message.read,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessageInput {
    pub fn into_new(self, created_at: DateTime<Utc>) -> DomainResult<NewContactMessage> {
        let message = optional_text(Some(self.message))
            .ok_or_else(|| DomainError::Validation("message cannot be empty".into()))?;
        Ok(NewContactMessage {
            name: Title::new("name", self.name)?,
            email: EmailAddress::new(self.email)?,
            message,
            created_at,
        })
    }
}
