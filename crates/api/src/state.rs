use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally. Handlers never
/// hold a connection themselves; each repository call checks one out and
/// returns it when the call finishes or its future is dropped.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: festival_db::DbPool,
    pub config: Arc<ServerConfig>,
}
