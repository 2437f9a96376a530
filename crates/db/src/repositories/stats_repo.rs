//! Aggregate queries backing the admin dashboard.

use serde::Serialize;
use sqlx::PgPool;

use mahjooz_core::booking::{STATUS_CANCELLED, STATUS_CONFIRMED, STATUS_PENDING};

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub hotels: i64,
    pub users: i64,
    pub bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub cancelled_bookings: i64,
    pub unread_notifications: i64,
}

/// Read-only aggregate statistics.
pub struct StatsRepo;

impl StatsRepo {
    /// Collect the dashboard counters.
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let mut stats = DashboardStats {
            hotels: sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
                .fetch_one(pool)
                .await?,
            users: sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?,
            unread_notifications: sqlx::query_scalar(
                "SELECT COUNT(*) FROM notifications WHERE is_read = false",
            )
            .fetch_one(pool)
            .await?,
            ..DashboardStats::default()
        };

        let by_status: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM bookings GROUP BY status")
                .fetch_all(pool)
                .await?;
        for (status, count) in by_status {
            stats.bookings += count;
            match status.as_str() {
                STATUS_PENDING => stats.pending_bookings = count,
                STATUS_CONFIRMED => stats.confirmed_bookings = count,
                STATUS_CANCELLED => stats.cancelled_bookings = count,
                _ => {}
            }
        }

        Ok(stats)
    }
}
