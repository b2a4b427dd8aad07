use crate::domain::book::{Book, BookDetails};
use crate::domain::errors::DomainResult;
use crate::domain::values::{Title, optional_rating, optional_text, optional_url};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub rating: Option<i16>,
    pub finished_on: Option<NaiveDate>,
    pub cover_url: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        let BookDetails {
            title,
            author,
            rating,
            finished_on,
            cover_url,
            notes,
        } = book.details;
        Self {
            id: book.id.into(),
            slug: book.slug.map(Into::into),
            title: title.into_inner(),
            author,
            rating: rating.map(Into::into),
            finished_on,
            cover_url,
            notes,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub rating: Option<i16>,
    #[serde(default)]
    pub finished_on: Option<NaiveDate>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookInput {
    pub fn into_details(self) -> DomainResult<BookDetails> {
        Ok(BookDetails {
            title: Title::new("title", self.title)?,
            author: optional_text(self.author),
            rating: optional_rating(self.rating)?,
            finished_on: self.finished_on,
            cover_url: optional_url("cover_url", self.cover_url)?,
            notes: optional_text(self.notes),
        })
    }
}
