// src/domain/flat/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::values::{RecordId, Title};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Where a flat is in the search pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlatStatus {
    #[default]
    Interested,
    ViewingScheduled,
    Applied,
    Rejected,
    Accepted,
}

impl FlatStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interested => "interested",
            Self::ViewingScheduled => "viewing_scheduled",
            Self::Applied => "applied",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for FlatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlatStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interested" => Ok(Self::Interested),
            "viewing_scheduled" => Ok(Self::ViewingScheduled),
            "applied" => Ok(Self::Applied),
            "rejected" => Ok(Self::Rejected),
            "accepted" => Ok(Self::Accepted),
            other => Err(DomainError::Validation(format!("unknown flat status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDetails {
    pub title: Title,
    pub address: Option<String>,
    pub city: Option<String>,
    pub monthly_rent: Option<i32>,
    pub rooms: Option<i16>,
    pub area_sqm: Option<i32>,
    pub listing_url: Option<String>,
    pub status: FlatStatus,
    pub notes: Option<String>,
}

impl FlatDetails {
    pub fn validate_figures(
        monthly_rent: Option<i32>,
        rooms: Option<i16>,
        area_sqm: Option<i32>,
    ) -> DomainResult<()> {
        if monthly_rent.is_some_and(|rent| rent < 0) {
            return Err(DomainError::Validation(
                "monthly_rent cannot be negative".into(),
            ));
        }
        if rooms.is_some_and(|r| r <= 0) {
            return Err(DomainError::Validation("rooms must be positive".into()));
        }
        if area_sqm.is_some_and(|a| a <= 0) {
            return Err(DomainError::Validation("area_sqm must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Flat {
    pub id: RecordId,
    pub details: FlatDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFlat {
    pub details: FlatDetails,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_its_name() {
        for status in [
            FlatStatus::Interested,
            FlatStatus::ViewingScheduled,
            FlatStatus::Applied,
            FlatStatus::Rejected,
            FlatStatus::Accepted,
        ] {
            assert_eq!(status.as_str().parse::<FlatStatus>().unwrap(), status);
        }
        assert!("sold".parse::<FlatStatus>().is_err());
    }

    #[test]
    fn figures_must_be_sensible() {
        assert!(FlatDetails::validate_figures(Some(1200), Some(3), Some(70)).is_ok());
        assert!(FlatDetails::validate_figures(Some(0), None, None).is_ok());
        assert!(FlatDetails::validate_figures(Some(-1), None, None).is_err());
        assert!(FlatDetails::validate_figures(None, Some(0), None).is_err());
        assert!(FlatDetails::validate_figures(None, None, Some(-5)).is_err());
    }
}
