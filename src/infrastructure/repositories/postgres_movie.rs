// src/infrastructure/repositories/postgres_movie.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::movie::{Movie, MovieDetails, MovieRepository, NewMovie};
use crate::domain::slug::Slug;
use crate::domain::values::{RecordId, Title, optional_rating};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const COLUMNS: &str = "id, title, slug, director, release_year, rating, watched_on, poster_url, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresMovieRepository {
    pool: PgPool,
}

impl PostgresMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    slug: Option<String>,
    director: Option<String>,
    release_year: Option<i16>,
    rating: Option<i16>,
    watched_on: Option<NaiveDate>,
    poster_url: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MovieRow> for Movie {
    type Error = DomainError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(row.id)?,
            slug: row.slug.map(Slug::from_stored),
            details: MovieDetails {
                title: Title::new("title", row.title)?,
                director: row.director,
                release_year: row.release_year,
                rating: optional_rating(row.rating)?,
                watched_on: row.watched_on,
                poster_url: row.poster_url,
                notes: row.notes,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    async fn insert(&self, movie: NewMovie) -> DomainResult<Movie> {
        let NewMovie {
            slug,
            details,
            created_at,
        } = movie;

        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "INSERT INTO movies (title, slug, director, release_year, rating, watched_on, poster_url, notes, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {COLUMNS}"
        ))
        .bind(details.title.as_str())
        .bind(slug.as_str())
        .bind(details.director)
        .bind(details.release_year)
        .bind(details.rating.map(i16::from))
        .bind(details.watched_on)
        .bind(details.poster_url)
        .bind(details.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Movie::try_from(row)
    }

    async fn update(
        &self,
        id: RecordId,
        details: MovieDetails,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Movie> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "UPDATE movies SET title = $2, director = $3, release_year = $4, rating = $5,
                 watched_on = $6, poster_url = $7, notes = $8, updated_at = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(details.title.as_str())
        .bind(details.director)
        .bind(details.release_year)
        .bind(details.rating.map(i16::from))
        .bind(details.watched_on)
        .bind(details.poster_url)
        .bind(details.notes)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("movie not found".into()))?;

        Movie::try_from(row)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("movie not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {COLUMNS} FROM movies WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Movie::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {COLUMNS} FROM movies WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Movie::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Movie>> {
        sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {COLUMNS} FROM movies ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Movie::try_from)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row_with_slug(slug: Option<&str>) -> MovieRow {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        MovieRow {
            id: 7,
            title: "Stalker".into(),
            slug: slug.map(str::to_string),
            director: None,
            release_year: None,
            rating: None,
            watched_on: None,
            poster_url: None,
            notes: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn legacy_slug_outside_current_format_still_loads() {
        for stored in ["-1", ""] {
            let movie = Movie::try_from(row_with_slug(Some(stored))).unwrap();
            assert_eq!(movie.slug.as_ref().map(Slug::as_str), Some(stored));
        }
    }

    #[test]
    fn missing_slug_stays_missing() {
        let movie = Movie::try_from(row_with_slug(None)).unwrap();
        assert!(movie.slug.is_none());
    }
}
