/**
 * Application State Management
 *
 * The `AppState` struct is the central state container handed to every
 * handler. All fields are cheap to clone: the pool, the config `Arc`, the
 * dispatcher and the broadcast sender are shared handles.
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they need, following Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::messaging::MessageDispatcher;
use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,

    /// Loaded server configuration
    pub config: Arc<ServerConfig>,

    /// The send path, wired to the realtime notifier
    pub dispatcher: MessageDispatcher,

    /// Realtime event broadcast channel
    ///
    /// Constructed once at startup; the dispatcher publishes into it and
    /// every `/realtime` subscriber holds a receiver.
    pub realtime_broadcast: RealtimeEventBroadcast,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime_broadcast.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
