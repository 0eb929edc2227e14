//! Conversation Data Structure
//!
//! A conversation between exactly two users, and the read-path projection
//! returned by the conversation list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;

/// Unordered pair of distinct participants, stored in sorted order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantPair {
    low: Uuid,
    high: Uuid,
}

impl ParticipantPair {
    /// Normalize two user ids into a pair; `None` when they are the same user
    pub fn new(a: Uuid, b: Uuid) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> Uuid {
        self.low
    }

    pub fn high(&self) -> Uuid {
        self.high
    }

    pub fn as_array(&self) -> [Uuid; 2] {
        [self.low, self.high]
    }
}

/// Represents a conversation between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    /// Unique conversation ID
    pub id: Uuid,
    /// The two participants, in normalized order
    pub participants: [Uuid; 2],
    /// Message ids in send order
    pub messages: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    /// Bumped on every new message
    pub updated_at: DateTime<Utc>,
}

/// Public fields of a user, denormalized into read-path views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPublicProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub avatar: String,
}

/// One entry of a user's conversation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationView {
    pub conversation_id: Uuid,
    /// The participant that is not the caller
    pub other_participant: UserPublicProfile,
    /// Most recently appended message, absent for an empty conversation
    pub last_message: Option<Message>,
    /// Messages in this conversation addressed to the caller and not yet read
    pub unread_count: u32,
    pub updated_at: DateTime<Utc>,
}
