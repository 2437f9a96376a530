//! Handlers for the `/favorites` resource.
//!
//! Favorites are a per-user set of hotels with a single toggle operation:
//! toggling a hotel that is absent adds it, toggling one that is present
//! removes it.

use axum::extract::{Path, State};
use axum::Json;
use mahjooz_core::error::CoreError;
use mahjooz_core::types::DbId;
use mahjooz_db::models::hotel::Hotel;
use mahjooz_db::repositories::{FavoriteRepo, HotelRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// POST /api/v1/favorites/{hotel_id}/toggle
///
/// Flip the favorite state of a hotel for the authenticated user and
/// report which way it went.
pub async fn toggle(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    HotelRepo::find_by_id(&state.pool, hotel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id: hotel_id,
        }))?;

    let outcome = FavoriteRepo::toggle(&state.pool, auth.user_id, hotel_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "status": outcome }
    })))
}

/// GET /api/v1/favorites/{hotel_id}
///
/// Report whether a hotel is in the authenticated user's favorites.
pub async fn check(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let favorited = FavoriteRepo::contains(&state.pool, auth.user_id, hotel_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "favorited": favorited }
    })))
}

/// GET /api/v1/favorites
///
/// List the authenticated user's favorite hotels, most recently added
/// first.
pub async fn list(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = FavoriteRepo::list_hotels_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(hotels))
}
