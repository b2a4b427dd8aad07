// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{EntityKind, Slug, SlugRepository, UnsluggedRecord};
use crate::domain::values::RecordId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::collections::HashSet;

/// Slug bookkeeping across the four sluggable tables. Table and column names
/// come from [`EntityKind`], never from input.
#[derive(Clone)]
pub struct PostgresSlugRepository {
    pool: PgPool,
}

impl PostgresSlugRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UnsluggedRow {
    id: i64,
    title: String,
}

#[async_trait]
impl SlugRepository for PostgresSlugRepository {
    async fn existing_slugs(&self, kind: EntityKind) -> DomainResult<HashSet<String>> {
        let slugs: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT slug FROM {} WHERE slug IS NOT NULL",
            kind.plural()
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }

    async fn list_unslugged(&self, kind: EntityKind) -> DomainResult<Vec<UnsluggedRecord>> {
        let rows = sqlx::query_as::<_, UnsluggedRow>(&format!(
            "SELECT id, {title} AS title FROM {table} WHERE slug IS NULL ORDER BY created_at, id",
            title = kind.title_column(),
            table = kind.plural(),
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(UnsluggedRecord {
                    id: RecordId::new(row.id)?,
                    title: row.title,
                })
            })
            .collect()
    }

    async fn assign_slug(&self, kind: EntityKind, id: RecordId, slug: &Slug) -> DomainResult<()> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET slug = $2 WHERE id = $1 AND slug IS NULL",
            kind.plural()
        ))
        .bind(i64::from(id))
        .bind(slug.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "{kind} {id} not found or already has a slug"
            )));
        }
        Ok(())
    }
}
