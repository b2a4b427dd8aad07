// src/infrastructure/repositories/postgres_feed.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::feed::{FeedCursor, FeedPost, FeedPostContent, FeedRepository, NewFeedPost, PostBody};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, body, image_url, link_url, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFeedRepository {
    pool: PgPool,
}

impl PostgresFeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FeedPostRow {
    id: i64,
    body: String,
    image_url: Option<String>,
    link_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FeedPostRow> for FeedPost {
    type Error = DomainError;

    fn try_from(row: FeedPostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            content: FeedPostContent {
                body: PostBody::new(row.body)?,
                image_url: row.image_url,
                link_url: row.link_url,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl FeedRepository for PostgresFeedRepository {
    async fn insert(&self, post: NewFeedPost) -> DomainResult<FeedPost> {
        let NewFeedPost {
            content,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, FeedPostRow>(&format!(
            "INSERT INTO feed_posts (body, image_url, link_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {COLUMNS}"
        ))
        .bind(content.body.as_str())
        .bind(content.image_url)
        .bind(content.link_url)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        FeedPost::try_from(row)
    }

    async fn update(
        &self,
        id: RecordId,
        content: FeedPostContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<FeedPost> {
        let row = sqlx::query_as::<_, FeedPostRow>(&format!(
            "UPDATE feed_posts SET body = $2, image_url = $3, link_url = $4, updated_at = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(content.body.as_str())
        .bind(content.image_url)
        .bind(content.link_url)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("feed post not found".into()))?;

        FeedPost::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM feed_posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("feed post not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<FeedPost>> {
        let row = sqlx::query_as::<_, FeedPostRow>(&format!(
            "SELECT {COLUMNS} FROM feed_posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(FeedPost::try_from).transpose()
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<FeedCursor>,
    ) -> DomainResult<(Vec<FeedPost>, Option<FeedCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM feed_posts"));
        if let Some(cursor) = &cursor {
            builder.push(" WHERE (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(i64::from(cursor.id));
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<FeedPostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut posts = rows
            .into_iter()
            .map(FeedPost::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if posts.len() > limit as usize {
            posts.pop();
            if let Some(last) = posts.last() {
                next_cursor = Some(FeedCursor::new(last.created_at, last.id));
            }
        }

        Ok((posts, next_cursor))
    }
}
