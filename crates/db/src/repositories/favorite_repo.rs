//! Repository for the `favorites` table.

use sqlx::PgPool;

use mahjooz_core::types::DbId;

use crate::models::favorite::FavoriteToggle;
use crate::models::hotel::Hotel;

/// Provides operations for a user's favorite hotels.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Toggle a hotel's membership in a user's favorites.
    ///
    /// Runs as a single transaction: a delete that removed a row means the
    /// hotel was favorited, otherwise an insert adds it. The insert is
    /// `ON CONFLICT DO NOTHING` so a concurrent duplicate add stays silent.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        hotel_id: DbId,
    ) -> Result<FavoriteToggle, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND hotel_id = $2")
            .bind(user_id)
            .bind(hotel_id)
            .execute(&mut *tx)
            .await?;

        let outcome = if deleted.rows_affected() > 0 {
            FavoriteToggle::Removed
        } else {
            sqlx::query(
                "INSERT INTO favorites (user_id, hotel_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(user_id)
            .bind(hotel_id)
            .execute(&mut *tx)
            .await?;
            FavoriteToggle::Added
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// Check whether a hotel is in a user's favorites.
    pub async fn contains(
        pool: &PgPool,
        user_id: DbId,
        hotel_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND hotel_id = $2)",
        )
        .bind(user_id)
        .bind(hotel_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List a user's favorite hotels, most recently added first.
    pub async fn list_hotels_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Hotel>, sqlx::Error> {
        sqlx::query_as::<_, Hotel>(
            "SELECT h.id, h.name, h.description, h.address, h.city, h.rating, h.images,
                    h.amenities, h.price_per_night_cents, h.currency, h.created_at, h.updated_at
             FROM favorites f
             JOIN hotels h ON h.id = f.hotel_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC, h.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
