use std::sync::Arc;

use holocron_sync::SyncCoordinator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holocron_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog sync coordinator; owns the single-flight run flag.
    pub sync: SyncCoordinator,
}
