//! Messaging Module
//!
//! This module contains the data structures of the direct-messaging core:
//!
//! - `Message` - A message from one user to another
//! - `Conversation` - The two-party record grouping message references
//! - `ConversationView` - A conversation as shown in a user's list
//!
//! # Usage
//!
//! ```rust
//! use directmsg::shared::messaging::{Message, Conversation, ConversationView};
//! ```

pub mod message;
pub mod conversation;

// Re-export all types
pub use message::{
    Message, SendMessageRequest, MarkReadRequest, HistoryParams, parse_user_id,
};
pub use conversation::{
    Conversation, ConversationView, ParticipantPair, UserPublicProfile,
};
