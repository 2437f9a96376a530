//! Notification entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use mahjooz_core::types::{DbId, Timestamp};

/// A notification row from the `notifications` table.
///
/// `user_id = NULL` means a broadcast visible to every user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug)]
pub struct CreateNotification {
    /// Target user, or `None` to broadcast.
    pub user_id: Option<DbId>,
    pub title: String,
    pub message: String,
    pub kind: String,
}
