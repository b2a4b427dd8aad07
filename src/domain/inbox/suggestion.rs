use crate::domain::errors::DomainError;
use crate::domain::values::{RecordId, Title};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// What a visitor is suggesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Movie,
    Book,
    Trip,
    Restaurant,
    Other,
}

impl SuggestionCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Book => "book",
            Self::Trip => "trip",
            Self::Restaurant => "restaurant",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(Self::Movie),
            "book" => Ok(Self::Book),
            "trip" => Ok(Self::Trip),
            "restaurant" => Ok(Self::Restaurant),
            "other" => Ok(Self::Other),
            other => Err(DomainError::Validation(format!(
                "unknown suggestion category: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Suggestion {
    pub id: RecordId,
    pub category: SuggestionCategory,
    pub title: Title,
    pub author_name: Option<String>,
    pub message: Option<String>,
    pub handled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSuggestion {
    pub category: SuggestionCategory,
    pub title: Title,
    pub author_name: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
