//! Handlers for the application settings singleton.
//!
//! Settings are a single row: branding, support contact, default currency
//! and the maintenance flag. Reading is public so the frontend can render
//! branding before login; writing is admin-only.

use axum::extract::State;
use axum::Json;
use mahjooz_core::settings::{
    validate_app_description, validate_app_name, validate_currency_code, validate_support_phone,
};
use mahjooz_db::models::app_settings::{AppSettings, UpdateAppSettings};
use mahjooz_db::repositories::AppSettingsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<AppSettings>> {
    let settings = AppSettingsRepo::get(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/v1/admin/settings
///
/// Partial update: absent fields keep their current values.
pub async fn update_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateAppSettings>,
) -> AppResult<Json<AppSettings>> {
    if let Some(app_name) = &input.app_name {
        validate_app_name(app_name)?;
    }
    if let Some(description) = &input.app_description {
        validate_app_description(description)?;
    }
    if let Some(phone) = &input.support_phone {
        validate_support_phone(phone)?;
    }
    if let Some(currency) = &input.default_currency {
        validate_currency_code(currency)?;
    }

    let settings = AppSettingsRepo::update(&state.pool, &input).await?;

    tracing::info!("Application settings updated");

    Ok(Json(settings))
}
