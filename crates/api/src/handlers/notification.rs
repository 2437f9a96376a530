//! Handlers for the `/notifications` resource.
//!
//! A notification row either targets one user or, with a NULL target, every
//! user (a broadcast). Users see their own rows plus broadcasts; admins
//! create rows through `/admin/notifications`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mahjooz_core::error::CoreError;
use mahjooz_core::notification::{validate_kind, validate_message, validate_title, KIND_INFO};
use mahjooz_core::types::DbId;
use mahjooz_db::models::notification::{CreateNotification, Notification};
use mahjooz_db::repositories::{NotificationRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Maximum number of notifications returned per page.
const MAX_LIMIT: i64 = 100;
/// Default page size when the client does not specify one.
const DEFAULT_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// When true, only unread notifications are returned.
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /admin/notifications`.
///
/// Omitting `user_id` makes the notification a broadcast.
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    pub user_id: Option<DbId>,
    pub title: String,
    pub message: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    KIND_INFO.to_string()
}

// ---------------------------------------------------------------------------
// User handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications
///
/// List the authenticated user's notifications (including broadcasts),
/// newest first.
pub async fn list_notifications(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let notifications = NotificationRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.unread_only,
        limit,
        offset,
    )
    .await?;

    Ok(Json(serde_json::json!({ "data": notifications })))
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::unread_count(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "count": count }
    })))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a single notification as read. 404 when the row does not exist,
/// is already read, or belongs to another user.
pub async fn mark_read(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let marked = NotificationRepo::mark_read(&state.pool, id, auth.user_id).await?;
    if !marked {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
///
/// Mark every visible notification as read and report how many changed.
pub async fn mark_all_read(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let marked = NotificationRepo::mark_all_read(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "marked_read": marked }
    })))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/notifications
///
/// Send a notification to one user, or to everyone when `user_id` is
/// omitted.
pub async fn send_notification(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SendNotificationRequest>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    validate_kind(&input.kind)?;
    validate_title(&input.title)?;
    validate_message(&input.message)?;

    if let Some(user_id) = input.user_id {
        UserRepo::find_by_id(&state.pool, user_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }))?;
    }

    let notification = NotificationRepo::create(
        &state.pool,
        &CreateNotification {
            user_id: input.user_id,
            title: input.title,
            message: input.message,
            kind: input.kind,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}
