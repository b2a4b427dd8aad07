use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::values::{RecordId, Title};
use chrono::{DateTime, Utc};
use std::fmt;

/// Loosely checked address: something on both sides of a single `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let valid = value
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !value.chars().any(char::is_whitespace);
        if !valid {
            return Err(DomainError::Validation("email is not a valid address".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: RecordId,
    pub name: Title,
    pub email: EmailAddress,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: Title,
    pub email: EmailAddress,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
