/**
 * Real-time Event System
 *
 * Events published on the realtime channel after a message has been stored.
 * The wire shape is `{channel, event, payload, timestamp}` where `channel` is
 * always `"messages"` and `event` names what happened.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::clock;
use crate::shared::messaging::Message;

/// Channel every message event is published on
pub const MESSAGES_CHANNEL: &str = "messages";

/// Type of real-time event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// A message was sent
    NewMessage,
}

impl EventType {
    /// Event name as used on the wire and as the SSE event name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::NewMessage => "new-message",
        }
    }
}

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealtimeEvent {
    pub channel: String,
    pub event: EventType,
    /// The fully materialized message
    pub payload: Message,
    /// When the event was published
    pub timestamp: DateTime<Utc>,
}

impl RealtimeEvent {
    /// Create a `new-message` event on the messages channel
    pub fn new_message(message: &Message) -> Self {
        Self {
            channel: MESSAGES_CHANNEL.to_string(),
            event: EventType::NewMessage,
            payload: message.clone(),
            timestamp: clock::now(),
        }
    }

    /// Whether the event concerns `user_id` as sender or receiver
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.payload.involves(user_id)
    }
}
