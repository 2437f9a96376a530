//! Application settings model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mahjooz_core::types::Timestamp;

/// The single `app_settings` row (`id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppSettings {
    #[serde(skip_serializing)]
    pub id: i16,
    pub app_name: String,
    pub app_description: String,
    pub support_phone: String,
    pub default_currency: String,
    pub maintenance_mode: bool,
    pub updated_at: Timestamp,
}

/// DTO for updating the settings row. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAppSettings {
    pub app_name: Option<String>,
    pub app_description: Option<String>,
    pub support_phone: Option<String>,
    pub default_currency: Option<String>,
    pub maintenance_mode: Option<bool>,
}
