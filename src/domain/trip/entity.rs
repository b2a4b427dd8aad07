// src/domain/trip/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::values::{RecordId, Title};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetails {
    pub name: Title,
    pub destination: Option<String>,
    pub started_on: Option<NaiveDate>,
    pub ended_on: Option<NaiveDate>,
    pub cover_url: Option<String>,
    pub notes: Option<String>,
}

impl TripDetails {
    /// A trip cannot end before it starts. Open-ended ranges are fine.
    pub fn validate_dates(
        started_on: Option<NaiveDate>,
        ended_on: Option<NaiveDate>,
    ) -> DomainResult<(Option<NaiveDate>, Option<NaiveDate>)> {
        if let (Some(start), Some(end)) = (started_on, ended_on) {
            if end < start {
                return Err(DomainError::Validation(
                    "ended_on cannot be before started_on".into(),
                ));
            }
        }
        Ok((started_on, ended_on))
    }
}

#[derive(Debug, Clone)]
pub struct Trip {
    pub id: RecordId,
    pub slug: Option<Slug>,
    pub details: TripDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTrip {
    pub slug: Slug,
    pub details: TripDetails,
    pub created_at: DateTime<Utc>,
}
