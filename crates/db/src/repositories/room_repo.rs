//! Repository for the `rooms` table.

use sqlx::PgPool;

use mahjooz_core::types::DbId;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, suite_id, name, room_type, price_per_night_cents, max_guests, \
                        images, amenities, available, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room under a suite, returning the created row.
    pub async fn create(
        pool: &PgPool,
        suite_id: DbId,
        input: &CreateRoom,
    ) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (suite_id, name, room_type, price_per_night_cents, max_guests,
                                images, amenities, available)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(suite_id)
            .bind(&input.name)
            .bind(&input.room_type)
            .bind(input.price_per_night_cents)
            .bind(input.max_guests)
            .bind(&input.images)
            .bind(&input.amenities)
            .bind(input.available)
            .fetch_one(pool)
            .await
    }

    /// Find a room by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the rooms of a set of suites in one query.
    ///
    /// Used to hydrate hotel listings without a per-suite round trip.
    pub async fn list_by_suite_ids(
        pool: &PgPool,
        suite_ids: &[DbId],
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE suite_id = ANY($1) ORDER BY id ASC");
        sqlx::query_as::<_, Room>(&query)
            .bind(suite_ids)
            .fetch_all(pool)
            .await
    }

    /// Update a room's fields (partial update).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                name = COALESCE($2, name),
                room_type = COALESCE($3, room_type),
                price_per_night_cents = COALESCE($4, price_per_night_cents),
                max_guests = COALESCE($5, max_guests),
                images = COALESCE($6, images),
                amenities = COALESCE($7, amenities),
                available = COALESCE($8, available),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.room_type)
            .bind(input.price_per_night_cents)
            .bind(input.max_guests)
            .bind(&input.images)
            .bind(&input.amenities)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room. Returns `true` if the room existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
