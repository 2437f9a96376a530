//! Handlers for the admin dashboard and user management endpoints.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mahjooz_core::error::CoreError;
use mahjooz_core::types::DbId;
use mahjooz_db::models::user::UserResponse;
use mahjooz_db::repositories::stats_repo::DashboardStats;
use mahjooz_db::repositories::{RoleRepo, StatsRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/stats
///
/// Aggregate counts for the admin dashboard.
pub async fn stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardStats>> {
    let stats = StatsRepo::dashboard(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/v1/admin/users
///
/// List all user accounts with their role names, password hashes omitted.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let roles: HashMap<DbId, String> = RoleRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|r| (r.id, r.name))
        .collect();

    let responses = users
        .iter()
        .map(|u| {
            let role = roles
                .get(&u.role_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            UserResponse::from_user(u, role)
        })
        .collect();

    Ok(Json(responses))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(UserResponse::from_user(&user, role)))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Deactivate an account. Rows are kept so bookings stay attributable;
/// admins cannot deactivate themselves.
pub async fn deactivate_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if admin.user_id == id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot deactivate your own account".to_string(),
        )));
    }

    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    Ok(StatusCode::NO_CONTENT)
}
