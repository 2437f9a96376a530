use std::sync::Arc;

use crate::config::ServerConfig;
use crate::payment::PaymentGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mahjooz_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Payment gateway used to authorize booking charges.
    pub payments: Arc<dyn PaymentGateway>,
}
