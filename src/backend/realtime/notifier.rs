/**
 * Message Notifier
 *
 * The seam between the dispatcher and the realtime transport. After a message
 * is stored, the dispatcher hands it to a `Notifier`; delivery is best-effort
 * and at-most-once. A failing notifier never fails the send.
 */

use thiserror::Error;

use crate::backend::realtime::broadcast::{broadcast_event, RealtimeEventBroadcast};
use crate::shared::messaging::Message;
use crate::shared::RealtimeEvent;

/// Failure to hand an event to the transport
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The transport is gone and cannot accept events
    #[error("realtime transport closed")]
    Closed,

    /// Per-event failure of an out-of-process transport, such as a pub/sub
    /// client losing its connection. `BroadcastNotifier` never returns it.
    #[error("realtime transport failed: {0}")]
    Transport(String),
}

/// Publishes newly stored messages to connected clients
pub trait Notifier: Send + Sync {
    /// Publish a `new-message` event for `message`
    ///
    /// Returns the number of subscribers the event was handed to.
    fn publish(&self, message: &Message) -> Result<usize, NotifyError>;
}

/// `Notifier` backed by the process-wide realtime broadcast channel
#[derive(Clone)]
pub struct BroadcastNotifier {
    tx: RealtimeEventBroadcast,
}

impl BroadcastNotifier {
    pub fn new(tx: RealtimeEventBroadcast) -> Self {
        Self { tx }
    }
}

impl Notifier for BroadcastNotifier {
    fn publish(&self, message: &Message) -> Result<usize, NotifyError> {
        // Zero subscribers is a normal state, not a failure.
        Ok(broadcast_event(&self.tx, RealtimeEvent::new_message(message)))
    }
}
