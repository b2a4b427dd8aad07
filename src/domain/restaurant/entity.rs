// src/domain/restaurant/entity.rs
use crate::domain::slug::Slug;
use crate::domain::values::{Rating, RecordId, Title};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetails {
    pub name: Title,
    pub city: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<Rating>,
    pub visited_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: RecordId,
    pub slug: Option<Slug>,
    pub details: RestaurantDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub slug: Slug,
    pub details: RestaurantDetails,
    pub created_at: DateTime<Utc>,
}
