use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable; requests hold no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tabletop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
