use crate::domain::errors::DomainResult;
use crate::domain::flat::{Flat, FlatDetails, FlatStatus};
use crate::domain::values::{Title, optional_text, optional_url};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlatDto {
    pub id: i64,
    pub title: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub monthly_rent: Option<i32>,
    pub rooms: Option<i16>,
    pub area_sqm: Option<i32>,
    pub listing_url: Option<String>,
    pub status: FlatStatus,
    pub notes: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Flat> for FlatDto {
    fn from(flat: Flat) -> Self {
        let FlatDetails {
            title,
            address,
            city,
            monthly_rent,
            rooms,
            area_sqm,
            listing_url,
            status,
            notes,
        } = flat.details;
        Self {
            id: flat.id.into(),
            title: title.into_inner(),
            address,
            city,
            monthly_rent,
            rooms,
            area_sqm,
            listing_url,
            status,
            notes,
            created_at: flat.created_at,
            updated_at: flat.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FlatInput {
    pub title: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub monthly_rent: Option<i32>,
    #[serde(default)]
    pub rooms: Option<i16>,
    #[serde(default)]
    pub area_sqm: Option<i32>,
    #[serde(default)]
    pub listing_url: Option<String>,
    #[serde(default)]
    pub status: FlatStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FlatInput {
    pub fn into_details(self) -> DomainResult<FlatDetails> {
        FlatDetails::validate_figures(self.monthly_rent, self.rooms, self.area_sqm)?;
        Ok(FlatDetails {
            title: Title::new("title", self.title)?,
            address: optional_text(self.address),
            city: optional_text(self.city),
            monthly_rent: self.monthly_rent,
            rooms: self.rooms,
            area_sqm: self.area_sqm,
            listing_url: optional_url("listing_url", self.listing_url)?,
            status: self.status,
            notes: optional_text(self.notes),
        })
    }
}
