//! Handlers for the `/hotels` resource and the admin catalog endpoints.
//!
//! Public browsing serves hotels hydrated with their full suite/room tree.
//! Catalog mutation is admin-only via [`RequireAdmin`].

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mahjooz_core::catalog::{
    validate_max_guests, validate_name, validate_price_cents, validate_rating,
};
use mahjooz_core::error::CoreError;
use mahjooz_core::settings::validate_currency_code;
use mahjooz_core::types::DbId;
use mahjooz_db::models::hotel::{CreateHotel, Hotel, HotelWithSuites, UpdateHotel};
use mahjooz_db::models::room::{CreateRoom, Room, UpdateRoom};
use mahjooz_db::models::suite::{CreateSuite, Suite, SuiteWithRooms};
use mahjooz_db::repositories::{AppSettingsRepo, HotelRepo, RoomRepo, SuiteRepo};
use mahjooz_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public browsing
// ---------------------------------------------------------------------------

/// GET /api/v1/hotels
///
/// List every hotel with its full suite/room tree, best-rated first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<HotelWithSuites>>> {
    let hotels = HotelRepo::list(&state.pool).await?;
    let hydrated = hydrate(&state.pool, hotels).await?;
    Ok(Json(hydrated))
}

/// GET /api/v1/hotels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HotelWithSuites>> {
    let hotel = HotelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id,
        }))?;

    let hydrated = hydrate(&state.pool, vec![hotel]).await?;
    let hotel = hydrated
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError("Hotel hydration returned empty".into()))?;
    Ok(Json(hotel))
}

/// Attach suites and rooms to a set of hotels using two batched queries
/// instead of one query per hotel.
async fn hydrate(pool: &DbPool, hotels: Vec<Hotel>) -> Result<Vec<HotelWithSuites>, AppError> {
    if hotels.is_empty() {
        return Ok(Vec::new());
    }

    let hotel_ids: Vec<DbId> = hotels.iter().map(|h| h.id).collect();
    let suites = SuiteRepo::list_by_hotel_ids(pool, &hotel_ids).await?;

    let suite_ids: Vec<DbId> = suites.iter().map(|s| s.id).collect();
    let rooms = if suite_ids.is_empty() {
        Vec::new()
    } else {
        RoomRepo::list_by_suite_ids(pool, &suite_ids).await?
    };

    let mut rooms_by_suite: HashMap<DbId, Vec<Room>> = HashMap::new();
    for room in rooms {
        rooms_by_suite.entry(room.suite_id).or_default().push(room);
    }

    let mut suites_by_hotel: HashMap<DbId, Vec<SuiteWithRooms>> = HashMap::new();
    for suite in suites {
        let rooms = rooms_by_suite.remove(&suite.id).unwrap_or_default();
        suites_by_hotel
            .entry(suite.hotel_id)
            .or_default()
            .push(SuiteWithRooms { suite, rooms });
    }

    Ok(hotels
        .into_iter()
        .map(|hotel| {
            let suites = suites_by_hotel.remove(&hotel.id).unwrap_or_default();
            HotelWithSuites { hotel, suites }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Admin: hotels
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/hotels
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateHotel>,
) -> AppResult<(StatusCode, Json<Hotel>)> {
    validate_name("Hotel name", &input.name)?;
    validate_rating(input.rating)?;
    validate_price_cents(input.price_per_night_cents)?;
    match &input.currency {
        Some(currency) => validate_currency_code(currency)?,
        // An omitted currency takes the platform-wide default.
        None => {
            let settings = AppSettingsRepo::get(&state.pool).await?;
            input.currency = Some(settings.default_currency);
        }
    }

    let hotel = HotelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// PUT /api/v1/admin/hotels/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHotel>,
) -> AppResult<Json<Hotel>> {
    if let Some(name) = &input.name {
        validate_name("Hotel name", name)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if let Some(price) = input.price_per_night_cents {
        validate_price_cents(price)?;
    }
    if let Some(currency) = &input.currency {
        validate_currency_code(currency)?;
    }

    let hotel = HotelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id,
        }))?;
    Ok(Json(hotel))
}

/// DELETE /api/v1/admin/hotels/{id}
///
/// Hard delete; suites, rooms, bookings, and favorites cascade.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HotelRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Admin: suites
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/hotels/{id}/suites
pub async fn create_suite(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
    Json(input): Json<CreateSuite>,
) -> AppResult<(StatusCode, Json<Suite>)> {
    validate_name("Suite name", &input.name)?;

    // 404 before insert so a bad hotel id is not reported as an FK error.
    HotelRepo::find_by_id(&state.pool, hotel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id: hotel_id,
        }))?;

    let suite = SuiteRepo::create(&state.pool, hotel_id, &input).await?;
    Ok((StatusCode::CREATED, Json(suite)))
}

/// DELETE /api/v1/admin/suites/{id}
pub async fn delete_suite(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SuiteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Suite",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Admin: rooms
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/suites/{id}/rooms
pub async fn create_room(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(suite_id): Path<DbId>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    validate_name("Room name", &input.name)?;
    validate_price_cents(input.price_per_night_cents)?;
    validate_max_guests(input.max_guests)?;

    SuiteRepo::find_by_id(&state.pool, suite_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Suite",
            id: suite_id,
        }))?;

    let room = RoomRepo::create(&state.pool, suite_id, &input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/v1/admin/rooms/{id}
pub async fn update_room(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    if let Some(name) = &input.name {
        validate_name("Room name", name)?;
    }
    if let Some(price) = input.price_per_night_cents {
        validate_price_cents(price)?;
    }
    if let Some(max_guests) = input.max_guests {
        validate_max_guests(max_guests)?;
    }

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id,
        }))?;
    Ok(Json(room))
}

/// DELETE /api/v1/admin/rooms/{id}
pub async fn delete_room(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RoomRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id,
        }))
    }
}
