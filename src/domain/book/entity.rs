// src/domain/book/entity.rs
use crate::domain::slug::Slug;
use crate::domain::values::{Rating, RecordId, Title};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: Title,
    pub author: Option<String>,
    pub rating: Option<Rating>,
    pub finished_on: Option<NaiveDate>,
    pub cover_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Book {
    pub id: RecordId,
    pub slug: Option<Slug>,
    pub details: BookDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub slug: Slug,
    pub details: BookDetails,
    pub created_at: DateTime<Utc>,
}
