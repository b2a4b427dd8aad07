// src/infrastructure/repositories/postgres_restaurant.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::restaurant::{NewRestaurant, Restaurant, RestaurantDetails, RestaurantRepository};
use crate::domain::slug::Slug;
use crate::domain::values::{RecordId, Title, optional_rating};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, name, slug, city, cuisine, rating, visited_on, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresRestaurantRepository {
    pool: PgPool,
}

impl PostgresRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    slug: Option<String>,
    city: Option<String>,
    cuisine: Option<String>,
    rating: Option<i16>,
    visited_on: Option<NaiveDate>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RestaurantRow> for Restaurant {
    type Error = DomainError;

    fn try_from(row: RestaurantRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            slug: row.slug.map(Slug::from_stored),
            details: RestaurantDetails {
                name: Title::new("name", row.name)?,
                city: row.city,
                cuisine: row.cuisine,
                rating: optional_rating(row.rating)?,
                visited_on: row.visited_on,
                notes: row.notes,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl RestaurantRepository for PostgresRestaurantRepository {
    async fn insert(&self, restaurant: NewRestaurant) -> DomainResult<Restaurant> {
        let NewRestaurant {
            slug,
            details,
            created_at,
        } = restaurant;

        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "INSERT INTO restaurants (name, slug, city, cuisine, rating, visited_on, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {COLUMNS}"
        ))
        .bind(details.name.as_str())
        .bind(slug.as_str())
        .bind(details.city)
        .bind(details.cuisine)
        .bind(details.rating.map(i16::from))
        .bind(details.visited_on)
        .bind(details.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Restaurant::try_from(row)
    }

    async fn update(
        &self,
        id: RecordId,
        details: RestaurantDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Restaurant> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "UPDATE restaurants SET name = $2, city = $3, cuisine = $4, rating = $5,
                 visited_on = $6, notes = $7, updated_at = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(details.name.as_str())
        .bind(details.city)
        .bind(details.cuisine)
        .bind(details.rating.map(i16::from))
        .bind(details.visited_on)
        .bind(details.notes)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("restaurant not found".into()))?;

        Restaurant::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("restaurant not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Restaurant>> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {COLUMNS} FROM restaurants WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Restaurant::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Restaurant>> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {COLUMNS} FROM restaurants WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Restaurant::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Restaurant>> {
        sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {COLUMNS} FROM restaurants ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Restaurant::try_from)
        .collect()
    }
}
