// src/infrastructure/repositories/postgres_flat.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::flat::{Flat, FlatDetails, FlatRepository, FlatStatus, NewFlat};
use crate::domain::values::{RecordId, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, address, city, monthly_rent, rooms, area_sqm, listing_url, status, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresFlatRepository {
    pool: PgPool,
}

impl PostgresFlatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FlatRow {
    id: i64,
    title: String,
    address: Option<String>,
    city: Option<String>,
    monthly_rent: Option<i32>,
    rooms: Option<i16>,
    area_sqm: Option<i32>,
    listing_url: Option<String>,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FlatRow> for Flat {
    type Error = DomainError;

    fn try_from(row: FlatRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            details: FlatDetails {
                title: Title::new("title", row.title)?,
                address: row.address,
                city: row.city,
                monthly_rent: row.monthly_rent,
                rooms: row.rooms,
                area_sqm: row.area_sqm,
                listing_url: row.listing_url,
                status: row.status.parse::<FlatStatus>()?,
                notes: row.notes,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl FlatRepository for PostgresFlatRepository {
    async fn insert(&self, flat: NewFlat) -> DomainResult<Flat> {
        let NewFlat {
            details,
            created_at,
        } = flat;

        let row = sqlx::query_as::<_, FlatRow>(&format!(
            "INSERT INTO flats (title, address, city, monthly_rent, rooms, area_sqm, listing_url, status, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING {COLUMNS}"
        ))
        .bind(details.title.as_str())
        .bind(details.address)
        .bind(details.city)
        .bind(details.monthly_rent)
        .bind(details.rooms)
        .bind(details.area_sqm)
        .bind(details.listing_url)
        .bind(details.status.as_str())
        .bind(details.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Flat::try_from(row)
    }

    async fn update(
        &self,
        id: RecordId,
        details: FlatDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Flat> {
        let row = sqlx::query_as::<_, FlatRow>(&format!(
            "UPDATE flats SET title = $2, address = $3, city = $4, monthly_rent = $5, rooms = $6,
                 area_sqm = $7, listing_url = $8, status = $9, notes = $10, updated_at = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(details.title.as_str())
        .bind(details.address)
        .bind(details.city)
        .bind(details.monthly_rent)
        .bind(details.rooms)
        .bind(details.area_sqm)
        .bind(details.listing_url)
        .bind(details.status.as_str())
        .bind(details.notes)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("flat not found".into()))?;

        Flat::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM flats WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("flat not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Flat>> {
        let row = sqlx::query_as::<_, FlatRow>(&format!(
            "SELECT {COLUMNS} FROM flats WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Flat::try_from).transpose()
    }

    async fn list(&self, status: Option<FlatStatus>) -> DomainResult<Vec<Flat>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM flats"));
        if let Some(status) = status {
            builder.push(" WHERE status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        builder
            .build_query_as::<FlatRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .map(Flat::try_from)
            .collect()
    }
}
