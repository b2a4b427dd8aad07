// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// URL identifier of a record: `[a-z0-9]` groups joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(format!(
                "slug `{value}` may only contain lowercase letters, digits and hyphens"
            )));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(format!(
                "slug `{value}` has a misplaced hyphen"
            )));
        }
        Ok(Self(value))
    }

    /// Wrap a slug read back from storage as-is.
    ///
    /// Stored slugs are the canonical lookup key. Rows written before the
    /// format was enforced may hold values `new` would reject (`""`, `"-1"`),
    /// and those must still load and resolve.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Record kinds that are addressed by slug. Uniqueness is scoped per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Movie,
    Book,
    Trip,
    Restaurant,
}

impl EntityKind {
    pub const ALL: [Self; 4] = [Self::Movie, Self::Book, Self::Trip, Self::Restaurant];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Book => "book",
            Self::Trip => "trip",
            Self::Restaurant => "restaurant",
        }
    }

    /// Plural form; doubles as the table name and the URL segment.
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Movie => "movies",
            Self::Book => "books",
            Self::Trip => "trips",
            Self::Restaurant => "restaurants",
        }
    }

    /// Column holding the text the slug is derived from.
    pub const fn title_column(self) -> &'static str {
        match self {
            Self::Movie | Self::Book => "title",
            Self::Trip | Self::Restaurant => "name",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "book" | "books" => Ok(Self::Book),
            "trip" | "trips" => Ok(Self::Trip),
            "restaurant" | "restaurants" => Ok(Self::Restaurant),
            other => Err(DomainError::Validation(format!(
                "unknown entity kind: {other}"
            ))),
        }
    }
}
