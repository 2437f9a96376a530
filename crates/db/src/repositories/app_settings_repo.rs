//! Repository for the single-row `app_settings` table.

use sqlx::PgPool;

use crate::models::app_settings::{AppSettings, UpdateAppSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, app_name, app_description, support_phone, default_currency, maintenance_mode, updated_at";

/// Provides access to the application settings row.
///
/// The table is constrained to a single row with `id = 1`, seeded by the
/// migrations, so reads never miss.
pub struct AppSettingsRepo;

impl AppSettingsRepo {
    /// Fetch the settings row.
    pub async fn get(pool: &PgPool) -> Result<AppSettings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM app_settings WHERE id = 1");
        sqlx::query_as::<_, AppSettings>(&query).fetch_one(pool).await
    }

    /// Update the settings row (partial update), returning the new state.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateAppSettings,
    ) -> Result<AppSettings, sqlx::Error> {
        let query = format!(
            "UPDATE app_settings SET
                app_name = COALESCE($1, app_name),
                app_description = COALESCE($2, app_description),
                support_phone = COALESCE($3, support_phone),
                default_currency = COALESCE($4, default_currency),
                maintenance_mode = COALESCE($5, maintenance_mode),
                updated_at = NOW()
             WHERE id = 1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppSettings>(&query)
            .bind(&input.app_name)
            .bind(&input.app_description)
            .bind(&input.support_phone)
            .bind(&input.default_currency)
            .bind(input.maintenance_mode)
            .fetch_one(pool)
            .await
    }
}
