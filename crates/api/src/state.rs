use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: drawlist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Intent bus the handlers publish notifications on after commit.
    pub intent_bus: Arc<drawlist_events::IntentBus>,
}
