//! Common test utilities and helpers
//!
//! - Temp-file SQLite database fixtures
//! - Test users and bearer tokens
//! - App construction for router tests
//! - Custom assertion macros
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;

use axum::Router;
use directmsg::backend::routes::create_router;
use directmsg::backend::server::{build_app_state, AppState, ServerConfig};
use directmsg::shared::MessagingConfig;

/// Server config used by the tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        messaging: MessagingConfig::builder()
            .append_retries(1)
            .build()
            .expect("valid messaging config"),
        ..ServerConfig::default()
    }
}

/// Application state and router over `db`
pub fn test_app(db: &TestDatabase) -> (AppState, Router) {
    let state = build_app_state(db.pool().clone(), test_config());
    let router = create_router(state.clone());
    (state, router)
}
