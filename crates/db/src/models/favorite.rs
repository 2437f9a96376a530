//! Favorite link model.

use serde::Serialize;
use sqlx::FromRow;

use mahjooz_core::types::{DbId, Timestamp};

/// A (user, hotel) favorite membership row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favorite {
    pub user_id: DbId,
    pub hotel_id: DbId,
    pub created_at: Timestamp,
}

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteToggle {
    Added,
    Removed,
}
