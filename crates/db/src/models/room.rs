//! Room entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mahjooz_core::types::{DbId, Timestamp};

/// A room row from the `rooms` table.
///
/// `available` is a plain flag, not a calendar; it gates quoting and
/// submission but carries no date-range semantics.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub suite_id: DbId,
    pub name: String,
    pub room_type: String,
    pub price_per_night_cents: i64,
    pub max_guests: i32,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room under a suite.
#[derive(Debug, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    #[serde(default = "default_room_type")]
    pub room_type: String,
    pub price_per_night_cents: i64,
    #[serde(default = "default_max_guests")]
    pub max_guests: i32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_room_type() -> String {
    "standard".to_string()
}

fn default_max_guests() -> i32 {
    2
}

fn default_available() -> bool {
    true
}

/// DTO for updating an existing room. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub room_type: Option<String>,
    pub price_per_night_cents: Option<i64>,
    pub max_guests: Option<i32>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub available: Option<bool>,
}
