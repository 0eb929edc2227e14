/**
 * Real-time Subscription Handler
 *
 * Server-Sent Events stream for the `/realtime` endpoint. Each subscriber
 * receives the `new-message` events of messages they sent or received.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged receivers log the number of skipped events and continue
 * - The stream ends when the broadcast channel closes
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

use crate::backend::middleware::AuthUser;
use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::shared::RealtimeEvent;

/// Events from `rx` that involve `user_id`
pub fn subscriber_events(
    rx: broadcast::Receiver<RealtimeEvent>,
    user_id: Uuid,
) -> impl Stream<Item = RealtimeEvent> {
    stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if !event.involves(user_id) {
                        continue;
                    }
                    return Some((event, rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    })
}

/// Handle real-time subscription (GET /realtime)
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: new-message
/// data: {"channel":"messages","event":"new-message","payload":{...},"timestamp":"..."}
/// ```
pub async fn handle_realtime_subscription(
    State(broadcast_tx): State<RealtimeEventBroadcast>,
    AuthUser(user): AuthUser,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!(user_id = %user.user_id, "[Realtime] Subscription active");

    let stream = subscriber_events(broadcast_tx.subscribe(), user.user_id).map(|event| {
        Event::default()
            .event(event.event.as_str())
            .json_data(&event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
