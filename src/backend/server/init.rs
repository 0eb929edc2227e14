/**
 * Server Initialization
 *
 * Builds the application state and the router.
 *
 * # Initialization Process
 *
 * 1. Open the database and run migrations
 * 2. Create the realtime broadcast channel
 * 3. Wire the dispatcher to a notifier on that channel
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::sync::broadcast;

use crate::backend::messaging::MessageDispatcher;
use crate::backend::realtime::BroadcastNotifier;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::shared::RealtimeEvent;

/// Assemble the application state around an open pool
pub fn build_app_state(pool: SqlitePool, config: ServerConfig) -> AppState {
    let (realtime_broadcast, _) = broadcast::channel::<RealtimeEvent>(config.realtime_capacity);

    let notifier = Arc::new(BroadcastNotifier::new(realtime_broadcast.clone()));
    let dispatcher = MessageDispatcher::new(pool.clone(), notifier, config.messaging.clone());

    AppState {
        pool,
        config: Arc::new(config),
        dispatcher,
        realtime_broadcast,
    }
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing directmsg backend server");

    let pool = load_database(&config).await?;
    let app_state = build_app_state(pool, config);

    tracing::info!("Realtime channel and dispatcher initialized");

    Ok(create_router(app_state))
}
