// src/infrastructure/repositories/postgres_trip.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::trip::{NewTrip, Trip, TripDetails, TripRepository};
use crate::domain::slug::Slug;
use crate::domain::values::{RecordId, Title};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, name, slug, destination, started_on, ended_on, cover_url, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TripRow {
    id: i64,
    name: String,
    slug: Option<String>,
    destination: Option<String>,
    started_on: Option<NaiveDate>,
    ended_on: Option<NaiveDate>,
    cover_url: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TripRow> for Trip {
    type Error = DomainError;

    fn try_from(row: TripRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            slug: row.slug.map(Slug::from_stored),
            details: TripDetails {
                name: Title::new("name", row.name)?,
                destination: row.destination,
                started_on: row.started_on,
                ended_on: row.ended_on,
                cover_url: row.cover_url,
                notes: row.notes,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn insert(&self, trip: NewTrip) -> DomainResult<Trip> {
        let NewTrip {
            slug,
            details,
            created_at,
        } = trip;

        let row = sqlx::query_as::<_, TripRow>(&format!(
            "INSERT INTO trips (name, slug, destination, started_on, ended_on, cover_url, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {COLUMNS}"
        ))
        .bind(details.name.as_str())
        .bind(slug.as_str())
        .bind(details.destination)
        .bind(details.started_on)
        .bind(details.ended_on)
        .bind(details.cover_url)
        .bind(details.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Trip::try_from(row)
    }

    async fn update(
        &self,
        id: RecordId,
        details: TripDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Trip> {
        let row = sqlx::query_as::<_, TripRow>(&format!(
            "UPDATE trips SET name = $2, destination = $3, started_on = $4, ended_on = $5,
                 cover_url = $6, notes = $7, updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(details.name.as_str())
        .bind(details.destination)
        .bind(details.started_on)
        .bind(details.ended_on)
        .bind(details.cover_url)
        .bind(details.notes)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("trip not found".into()))?;

        Trip::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("trip not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Trip>> {
        let row = sqlx::query_as::<_, TripRow>(&format!(
            "SELECT {COLUMNS} FROM trips WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Trip::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Trip>> {
        let row = sqlx::query_as::<_, TripRow>(&format!(
            "SELECT {COLUMNS} FROM trips WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Trip::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Trip>> {
        sqlx::query_as::<_, TripRow>(&format!(
            "SELECT {COLUMNS} FROM trips ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Trip::try_from)
        .collect()
    }
}
