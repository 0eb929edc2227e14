//! directmsg - Direct Messaging Backend
//!
//! Users exchange text messages in two-party conversations, with read-state
//! tracking and realtime delivery to connected peers.
//!
//! # Module Structure
//!
//! - **`shared`** - Serializable types exchanged over the API
//!   - Messages, conversations and conversation views
//!   - Realtime events, the response envelope, configuration
//!
//! - **`backend`** - The server
//!   - Axum HTTP API and SSE endpoint
//!   - Conversation resolver, dispatcher, read state, list and history
//!   - SQLite persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use directmsg::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::load()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `backend::BackendError` for everything the server returns, rendered as
//!   the JSON envelope with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
