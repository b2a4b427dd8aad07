// src/infrastructure/repositories/postgres_book.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::book::{Book, BookDetails, BookRepository, NewBook};
use crate::domain::slug::Slug;
use crate::domain::values::{RecordId, Title, optional_rating};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, title, slug, author, rating, finished_on, cover_url, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    slug: Option<String>,
    author: Option<String>,
    rating: Option<i16>,
    finished_on: Option<NaiveDate>,
    cover_url: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookRow> for Book {
    type Error = DomainError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            slug: row.slug.map(Slug::from_stored),
            details: BookDetails {
                title: Title::new("title", row.title)?,
                author: row.author,
                rating: optional_rating(row.rating)?,
                finished_on: row.finished_on,
                cover_url: row.cover_url,
                notes: row.notes,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn insert(&self, book: NewBook) -> DomainResult<Book> {
        let NewBook {
            slug,
            details,
            created_at,
        } = book;

        let row = sqlx::query_as::<_, BookRow>(&format!(
            "INSERT INTO books (title, slug, author, rating, finished_on, cover_url, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {COLUMNS}"
        ))
        .bind(details.title.as_str())
        .bind(slug.as_str())
        .bind(details.author)
        .bind(details.rating.map(i16::from))
        .bind(details.finished_on)
        .bind(details.cover_url)
        .bind(details.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Book::try_from(row)
    }

    async fn update(
        &self,
        id: RecordId,
        details: BookDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "UPDATE books SET title = $2, author = $3, rating = $4, finished_on = $5,
                 cover_url = $6, notes = $7, updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(details.title.as_str())
        .bind(details.author)
        .bind(details.rating.map(i16::from))
        .bind(details.finished_on)
        .bind(details.cover_url)
        .bind(details.notes)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("book not found".into()))?;

        Book::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("book not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {COLUMNS} FROM books WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Book::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Book>> {
        sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {COLUMNS} FROM books ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Book::try_from)
        .collect()
    }
}
