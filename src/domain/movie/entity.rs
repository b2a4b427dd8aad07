// src/domain/movie/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::values::{Rating, RecordId, Title};
use chrono::{DateTime, NaiveDate, Utc};

pub const EARLIEST_RELEASE_YEAR: i16 = 1870;
pub const LATEST_RELEASE_YEAR: i16 = 2100;

/// Editable part of a movie. Replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: Title,
    pub director: Option<String>,
    pub release_year: Option<i16>,
    pub rating: Option<Rating>,
    pub watched_on: Option<NaiveDate>,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
}

impl MovieDetails {
    pub fn validate_release_year(year: Option<i16>) -> DomainResult<Option<i16>> {
        match year {
            Some(y) if !(EARLIEST_RELEASE_YEAR..=LATEST_RELEASE_YEAR).contains(&y) => {
                Err(DomainError::Validation(format!(
                    "release_year must be between {EARLIEST_RELEASE_YEAR} and {LATEST_RELEASE_YEAR}"
                )))
            }
            other => Ok(other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Movie {
    pub id: RecordId,
    /// `None` only for rows created before slugs existed and not yet backfilled.
    pub slug: Option<Slug>,
    pub details: MovieDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub slug: Slug,
    pub details: MovieDetails,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_bounds() {
        assert_eq!(MovieDetails::validate_release_year(None).unwrap(), None);
        assert_eq!(
            MovieDetails::validate_release_year(Some(1999)).unwrap(),
            Some(1999)
        );
        assert!(MovieDetails::validate_release_year(Some(1700)).is_err());
        assert!(MovieDetails::validate_release_year(Some(3000)).is_err());
    }
}
