use crate::domain::errors::DomainResult;
use crate::domain::movie::{Movie, MovieDetails};
use crate::domain::values::{Title, optional_rating, optional_text, optional_url};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieDto {
    pub id: i64,
    /// Absent only on legacy rows awaiting the slug backfill.
    pub slug: Option<String>,
    pub title: String,
    pub director: Option<String>,
    pub release_year: Option<i16>,
    pub rating: Option<i16>,
    pub watched_on: Option<NaiveDate>,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        let MovieDetails {
            title,
            director,
            release_year,
            rating,
            watched_on,
            poster_url,
            notes,
        } = movie.details;
        Self {
            id: movie.id.into(),
            slug: movie.slug.map(Into::into),
            title: title.into_inner(),
            director,
            release_year,
            rating: rating.map(Into::into),
            watched_on,
            poster_url,
            notes,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// Body of create and update requests. Updates replace every field; the slug is never touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MovieInput {
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub release_year: Option<i16>,
    #[serde(default)]
    pub rating: Option<i16>,
    #[serde(default)]
    pub watched_on: Option<NaiveDate>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MovieInput {
    pub fn into_details(self) -> DomainResult<MovieDetails> {
        Ok(MovieDetails {
            title: Title::new("title", self.title)?,
            director: optional_text(self.director),
            release_year: MovieDetails::validate_release_year(self.release_year)?,
            rating: optional_rating(self.rating)?,
            watched_on: self.watched_on,
            poster_url: optional_url("poster_url", self.poster_url)?,
            notes: optional_text(self.notes),
        })
    }
}
