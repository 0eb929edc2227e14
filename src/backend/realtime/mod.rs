//! Real-time Update Module
//!
//! Delivery of newly sent messages to connected clients.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Broadcast channel type and send helper
//! ├── notifier.rs     - Notifier trait used by the dispatcher
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery Guarantees
//!
//! At-most-once and best-effort. A client that is not subscribed when a
//! message is sent does not receive the event; it reads the message through
//! the history endpoint instead.

/// Event broadcasting utilities
pub mod broadcast;

/// Notifier seam between dispatcher and transport
pub mod notifier;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{RealtimeEventBroadcast, broadcast_event};
pub use notifier::{Notifier, NotifyError, BroadcastNotifier};
pub use subscription::{handle_realtime_subscription, subscriber_events};
