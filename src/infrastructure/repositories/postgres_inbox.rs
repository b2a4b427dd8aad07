// src/infrastructure/repositories/postgres_inbox.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::inbox::{
    ContactMessage, ContactMessageRepository, EmailAddress, NewContactMessage, NewSuggestion,
    Suggestion, SuggestionCategory, SuggestionRepository,
};
use crate::domain::values::{RecordId, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SUGGESTION_COLUMNS: &str = "id, category, title, author_name, message, handled, created_at";
const CONTACT_COLUMNS: &str = "id, name, email, message, read, created_at";

#[derive(Clone)]
pub struct PostgresSuggestionRepository {
    pool: PgPool,
}

impl PostgresSuggestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SuggestionRow {
    id: i64,
    category: String,
    title: String,
    author_name: Option<String>,
    message: Option<String>,
    handled: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<SuggestionRow> for Suggestion {
    type Error = DomainError;

    fn try_from(row: SuggestionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            category: row.category.parse::<SuggestionCategory>()?,
            title: Title::new("title", row.title)?,
            author_name: row.author_name,
            message: row.message,
            handled: row.handled,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ContactMessageRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactMessageRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: ContactMessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            name: Title::new("name", row.name)?,
            email: EmailAddress::new(row.email)?,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SuggestionRepository for PostgresSuggestionRepository {
    async fn insert(&self, suggestion: NewSuggestion) -> DomainResult<Suggestion> {
        let row = sqlx::query_as::<_, SuggestionRow>(&format!(
            "INSERT INTO suggestions (category, title, author_name, message, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {SUGGESTION_COLUMNS}"
        ))
        .bind(suggestion.category.as_str())
        .bind(suggestion.title.as_str())
        .bind(suggestion.author_name)
        .bind(suggestion.message)
        .bind(suggestion.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Suggestion::try_from(row)
    }

    async fn list(&self, pending_only: bool) -> DomainResult<Vec<Suggestion>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {SUGGESTION_COLUMNS} FROM suggestions"));
        if pending_only {
            builder.push(" WHERE handled = FALSE");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        builder
            .build_query_as::<SuggestionRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Suggestion::try_from)
            .collect()
    }

    async fn mark_handled(&self, id: RecordId) -> DomainResult<Suggestion> {
        let row = sqlx::query_as::<_, SuggestionRow>(&format!(
            "UPDATE suggestions SET handled = TRUE WHERE id = $1 RETURNING {SUGGESTION_COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("suggestion not found".into()))?;

        Suggestion::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM suggestions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("suggestion not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactMessageRow>(&format!(
            "INSERT INTO contact_messages (name, email, message, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(message.name.as_str())
        .bind(message.email.as_str())
        .bind(message.message)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }

    async fn list(&self, unread_only: bool) -> DomainResult<Vec<ContactMessage>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CONTACT_COLUMNS} FROM contact_messages"));
        if unread_only {
            builder.push(" WHERE read = FALSE");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        builder
            .build_query_as::<ContactMessageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(ContactMessage::try_from)
            .collect()
    }

    async fn mark_read(&self, id: RecordId) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactMessageRow>(&format!(
            "UPDATE contact_messages SET read = TRUE WHERE id = $1 RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;

        ContactMessage::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("contact message not found".into()));
        }
        Ok(())
    }
}
