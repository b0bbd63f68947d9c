use std::sync::Arc;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: enamorado_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Registry of live-update WebSocket clients.
    pub ws_manager: Arc<WsManager>,
    /// Bus that submission handlers publish [`enamorado_events::LiveEvent`]s on.
    pub event_bus: Arc<enamorado_events::EventBus>,
}
