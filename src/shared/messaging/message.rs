//! Message Data Structure
//!
//! A direct message from one user to another, plus the request types of the
//! message endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::clock;
use crate::shared::error::SharedError;

/// A direct message between two users
///
/// Owned by the message store. Conversations only hold its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique message ID, assigned on creation
    pub id: Uuid,
    /// User who sent the message
    pub sender_id: Uuid,
    /// User the message is addressed to
    pub receiver_id: Uuid,
    /// Text content, never empty
    pub body: String,
    /// Whether the receiver has read the message
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread message stamped with the current time
    pub fn new(sender_id: Uuid, receiver_id: Uuid, body: String) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            body,
            is_read: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` sent or received this message
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

/// Request to send a message
///
/// `userId` and `message` are accepted as aliases of the field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(alias = "targetUserId", alias = "userId")]
    pub target_user_id: String,
    #[serde(alias = "message")]
    pub body: String,
}

impl SendMessageRequest {
    /// Check the payload and return the parsed target user id
    pub fn validate(&self, max_body_len: usize) -> Result<Uuid, SharedError> {
        if self.body.trim().is_empty() {
            return Err(SharedError::validation("body", "message body cannot be empty"));
        }
        if self.body.chars().count() > max_body_len {
            return Err(SharedError::validation(
                "body",
                format!("message body exceeds {} characters", max_body_len),
            ));
        }
        parse_user_id("target_user_id", &self.target_user_id)
    }
}

/// Request to mark a message as read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    #[serde(alias = "messageId")]
    pub message_id: String,
}

/// Query parameters of a history read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<u32>,
}

/// Parse an identifier supplied by a client
pub fn parse_user_id(field: &str, raw: &str) -> Result<Uuid, SharedError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| SharedError::validation(field, format!("'{}' is not a valid id", raw)))
}
