use std::sync::Arc;

use crate::config::ServerConfig;

/// Application-wide state handed to every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool.
    pub pool: salesdesk_db::DbPool,
    /// Settings loaded at startup.
    pub config: Arc<ServerConfig>,
}
