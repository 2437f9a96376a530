//! Repository for the `suites` table.

use sqlx::PgPool;

use mahjooz_core::types::DbId;

use crate::models::suite::{CreateSuite, Suite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, hotel_id, name, description, images, amenities, created_at, updated_at";

/// Provides CRUD operations for suites.
pub struct SuiteRepo;

impl SuiteRepo {
    /// Insert a new suite under a hotel, returning the created row.
    pub async fn create(
        pool: &PgPool,
        hotel_id: DbId,
        input: &CreateSuite,
    ) -> Result<Suite, sqlx::Error> {
        let query = format!(
            "INSERT INTO suites (hotel_id, name, description, images, amenities)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Suite>(&query)
            .bind(hotel_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.images)
            .bind(&input.amenities)
            .fetch_one(pool)
            .await
    }

    /// Find a suite by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Suite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suites WHERE id = $1");
        sqlx::query_as::<_, Suite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the suites of a set of hotels in one query.
    ///
    /// Used to hydrate hotel listings without a per-hotel round trip.
    pub async fn list_by_hotel_ids(
        pool: &PgPool,
        hotel_ids: &[DbId],
    ) -> Result<Vec<Suite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suites WHERE hotel_id = ANY($1) ORDER BY id ASC"
        );
        sqlx::query_as::<_, Suite>(&query)
            .bind(hotel_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a suite. Its rooms cascade. Returns `true` if the suite existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM suites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
