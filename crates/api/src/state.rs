use std::sync::Arc;

use fertiflow_db::storage::Storage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (PostgreSQL or in-memory).
    pub storage: Arc<dyn Storage>,
    /// Server configuration, read by the session extractor and auth handlers.
    pub config: Arc<ServerConfig>,
}
