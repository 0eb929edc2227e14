//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Message and conversation endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness probe
//! - `GET /realtime` - SSE stream of the caller's `new-message` events
//! - `POST /api/messages` - Send a message
//! - `GET /api/messages/{peer_id}` - Message history
//! - `PATCH /api/messages/{message_id}/read` - Mark read
//! - `POST /api/messages/update-status` - Mark read
//! - `GET /api/conversations` - Conversation list

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
