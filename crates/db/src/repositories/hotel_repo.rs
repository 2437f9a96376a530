//! Repository for the `hotels` table.

use sqlx::PgPool;

use mahjooz_core::types::DbId;

use crate::models::hotel::{CreateHotel, Hotel, UpdateHotel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, address, city, rating, images, amenities, \
                        price_per_night_cents, currency, created_at, updated_at";

/// Provides CRUD operations for hotels.
pub struct HotelRepo;

impl HotelRepo {
    /// Insert a new hotel, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHotel) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (name, description, address, city, rating, images, amenities,
                                 price_per_night_cents, currency)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'EGP'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(&input.city)
            .bind(input.rating)
            .bind(&input.images)
            .bind(&input.amenities)
            .bind(input.price_per_night_cents)
            .bind(&input.currency)
            .fetch_one(pool)
            .await
    }

    /// Find a hotel by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = $1");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all hotels, best-rated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels ORDER BY rating DESC, id ASC");
        sqlx::query_as::<_, Hotel>(&query).fetch_all(pool).await
    }

    /// Update a hotel's fields (partial update).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHotel,
    ) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!(
            "UPDATE hotels SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                address = COALESCE($4, address),
                city = COALESCE($5, city),
                rating = COALESCE($6, rating),
                images = COALESCE($7, images),
                amenities = COALESCE($8, amenities),
                price_per_night_cents = COALESCE($9, price_per_night_cents),
                currency = COALESCE($10, currency),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(&input.city)
            .bind(input.rating)
            .bind(&input.images)
            .bind(&input.amenities)
            .bind(input.price_per_night_cents)
            .bind(&input.currency)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hotel. Suites, rooms, bookings and favorites cascade.
    ///
    /// Returns `true` if the hotel existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
