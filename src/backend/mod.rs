//! Backend Module
//!
//! All server-side code: the Axum server, the messaging core and its storage.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`messaging`** - Conversations, messages, read state and history
//! - **`realtime`** - Notifier and SSE delivery of new messages
//! - **`auth`** - Token verification and user lookups
//! - **`middleware`** - The `AuthUser` extractor
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── messaging/      - Conversation/message core
//! ├── realtime/       - Event broadcasting
//! ├── auth/           - Identity boundary
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! A send goes handler → `MessageDispatcher` → resolver and stores →
//! `Notifier`. Read paths (conversation list, history) go straight from the
//! handler to the storage queries and never write.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Conversation/message core
pub mod messaging;

/// Real-time update system
pub mod realtime;

/// Backend error types
pub mod error;

/// Token verification and user lookups
pub mod auth;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use server::{create_app, AppState, ServerConfig};
pub use messaging::MessageDispatcher;
pub use realtime::{Notifier, BroadcastNotifier, RealtimeEventBroadcast};
pub use error::BackendError;
