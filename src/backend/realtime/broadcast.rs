/**
 * Real-time Event Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. Every subscriber receives a copy of each event sent
 * while it is subscribed; nothing is buffered for clients that are offline.
 */

use crate::shared::RealtimeEvent;
use tokio::sync::broadcast;

/// Real-time update event broadcast
///
/// Created once at startup and cloned into every component that publishes
/// or subscribes.
///
/// # Usage
///
/// ```rust
/// use directmsg::backend::realtime::RealtimeEventBroadcast;
/// use directmsg::shared::RealtimeEvent;
/// use tokio::sync::broadcast;
///
/// let (tx, _) = broadcast::channel::<RealtimeEvent>(1000);
/// let broadcast: RealtimeEventBroadcast = tx;
/// ```
pub type RealtimeEventBroadcast = broadcast::Sender<RealtimeEvent>;

/// Broadcast a real-time event to all subscribers
///
/// Returns the number of active subscribers that received the event
/// (0 if there are none).
pub fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: RealtimeEvent) -> usize {
    let event_name = event.event.as_str();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!("[Realtime] {} event broadcast to {} subscribers", event_name, subscriber_count);
            subscriber_count
        }
        Err(_) => {
            tracing::debug!("[Realtime] No subscribers to receive {} event", event_name);
            0
        }
    }
}
