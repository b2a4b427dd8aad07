// src/domain/values.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Storage-assigned identifier shared by every record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display title or name of a record. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(field: &str, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(format!("{field} cannot be empty")));
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

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// Personal score on a 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i16);

impl Rating {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 10;

    pub fn new(value: i16) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!(
                "rating must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl From<Rating> for i16 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Trim free text and collapse blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like [`optional_text`], but the value must look like an absolute http(s) URL.
pub fn optional_url(field: &str, value: Option<String>) -> DomainResult<Option<String>> {
    match optional_text(value) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(Some(url)),
        Some(_) => Err(DomainError::Validation(format!(
            "{field} must be an http(s) URL"
        ))),
        None => Ok(None),
    }
}

pub fn optional_rating(value: Option<i16>) -> DomainResult<Option<Rating>> {
    value.map(Rating::new).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_rejects_non_positive() {
        assert!(RecordId::new(0).is_err());
        assert!(RecordId::new(-3).is_err());
        assert_eq!(i64::from(RecordId::new(7).unwrap()), 7);
    }

    #[test]
    fn title_is_trimmed_and_non_blank() {
        assert_eq!(Title::new("title", "  Dune ").unwrap().as_str(), "Dune");
        let err = Title::new("name", "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "name cannot be empty"));
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(11).is_err());
        assert_eq!(Rating::new(10).unwrap().value(), 10);
    }

    #[test]
    fn optional_url_requires_scheme() {
        assert_eq!(optional_url("poster_url", Some("  ".into())).unwrap(), None);
        assert!(optional_url("poster_url", Some("ftp://x".into())).is_err());
        assert_eq!(
            optional_url("poster_url", Some("https://img.example/p.jpg".into())).unwrap(),
            Some("https://img.example/p.jpg".to_string())
        );
    }
}
