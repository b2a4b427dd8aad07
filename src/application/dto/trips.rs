use crate::domain::errors::DomainResult;
use crate::domain::trip::{Trip, TripDetails};
use crate::domain::values::{Title, optional_text, optional_url};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TripDto {
    pub id: i64,
    pub slug: Option<String>,
    pub name: String,
    pub destination: Option<String>,
    pub started_on: Option<NaiveDate>,
    pub ended_on: Option<NaiveDate>,
    pub cover_url: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Trip> for TripDto {
    fn from(trip: Trip) -> Self {
        let TripDetails {
            name,
            destination,
            started_on,
            ended_on,
            cover_url,
            notes,
        } = trip.details;
        Self {
            id: trip.id.into(),
            slug: trip.slug.map(Into::into),
            name: name.into_inner(),
            destination,
            started_on,
            ended_on,
            cover_url,
            notes,
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TripInput {
    pub name: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub started_on: Option<NaiveDate>,
    #[serde(default)]
    pub ended_on: Option<NaiveDate>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TripInput {
    pub fn into_details(self) -> DomainResult<TripDetails> {
        let (started_on, ended_on) = TripDetails::validate_dates(self.started_on, self.ended_on)?;
        Ok(TripDetails {
            name: Title::new("name", self.name)?,
            destination: optional_text(self.destination),
            started_on,
            ended_on,
            cover_url: optional_url("cover_url", self.cover_url)?,
            notes: optional_text(self.notes),
        })
    }
}
