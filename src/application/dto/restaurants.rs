use crate::domain::errors::DomainResult;
use crate::domain::restaurant::{Restaurant, RestaurantDetails};
use crate::domain::values::{Title, optional_rating, optional_text};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i64,
    pub slug: Option<String>,
    pub name: String,
    pub city: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<i16>,
    pub visited_on: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(restaurant: Restaurant) -> Self {
        let RestaurantDetails {
            name,
            city,
            cuisine,
            rating,
            visited_on,
            notes,
        } = restaurant.details;
        Self {
            id: restaurant.id.into(),
            slug: restaurant.slug.map(Into::into),
            name: name.into_inner(),
            city,
            cuisine,
            rating: rating.map(Into::into),
            visited_on,
            notes,
            created_at: restaurant.created_at,
            updated_at: restaurant.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RestaurantInput {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub rating: Option<i16>,
    #[serde(default)]
    pub visited_on: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RestaurantInput {
    pub fn into_details(self) -> DomainResult<RestaurantDetails> {
        Ok(RestaurantDetails {
            name: Title::new("name", self.name)?,
            city: optional_text(self.city),
            cuisine: optional_text(self.cuisine),
            rating: optional_rating(self.rating)?,
            visited_on: self.visited_on,
            notes: optional_text(self.notes),
        })
    }
}
