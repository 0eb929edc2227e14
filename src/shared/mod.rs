//! Shared Module
//!
//! This module contains the types and data structures exchanged between the
//! HTTP layer, the messaging core and connected clients. All of them are plain
//! serde types so they can travel as JSON over the API and the realtime stream.
//!
//! # Overview
//!
//! - **`messaging`** - Messages, conversations and their read-path views
//! - **`event`** - Realtime events published when a message is sent
//! - **`response`** - The JSON envelope every API response is wrapped in
//! - **`config`** - Tunables of the messaging core
//! - **`error`** - Validation errors raised by shared types
//! - **`clock`** - Storage-precision timestamps

/// Messaging data structures
pub mod messaging;

/// Real-time event system
pub mod event;

/// API response envelope
pub mod response;

/// Shared error types
pub mod error;

/// Messaging configuration
pub mod config;

/// Timestamp helpers
pub mod clock;

/// Re-export commonly used types for convenience
pub use event::{RealtimeEvent, EventType, MESSAGES_CHANNEL};
pub use error::SharedError;
pub use response::ApiResponse;
pub use config::{MessagingConfig, MessagingConfigBuilder, ConfigError};
