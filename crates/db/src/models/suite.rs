//! Suite entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mahjooz_core::types::{DbId, Timestamp};

use crate::models::room::Room;

/// A suite row from the `suites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Suite {
    pub id: DbId,
    pub hotel_id: DbId,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A suite hydrated with its rooms.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteWithRooms {
    #[serde(flatten)]
    pub suite: Suite,
    pub rooms: Vec<Room>,
}

/// DTO for creating a new suite under a hotel.
#[derive(Debug, Deserialize)]
pub struct CreateSuite {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}
