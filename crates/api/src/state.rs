use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted, the config is
/// behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Store connection pool, created once at startup.
    pub pool: ticketdesk_db::DbPool,
    /// Server configuration, including the per-version API keys.
    pub config: Arc<ServerConfig>,
}
