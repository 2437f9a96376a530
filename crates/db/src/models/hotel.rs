//! Hotel entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mahjooz_core::types::{DbId, Timestamp};

use crate::models::suite::SuiteWithRooms;

/// A hotel row from the `hotels` table.
///
/// Nightly prices are integer cents of `currency`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub rating: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub price_per_night_cents: i64,
    pub currency: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel hydrated with its full suite/room containment tree, as served
/// by the browsing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct HotelWithSuites {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub suites: Vec<SuiteWithRooms>,
}

/// DTO for creating a new hotel.
#[derive(Debug, Deserialize)]
pub struct CreateHotel {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub price_per_night_cents: i64,
    pub currency: Option<String>,
}

/// DTO for updating an existing hotel. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateHotel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub rating: Option<f64>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub price_per_night_cents: Option<i64>,
    pub currency: Option<String>,
}
