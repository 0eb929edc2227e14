//! Messaging Module
//!
//! The conversation/message core: sending, read state, the conversation list
//! and message history.
//!
//! # Module Structure
//!
//! ```text
//! messaging/
//! ├── mod.rs           - Module exports and documentation
//! ├── db.rs            - SQL for messages, conversations and message references
//! ├── resolver.rs      - Find-or-create of the conversation between two users
//! ├── dispatcher.rs    - The send path
//! ├── read_state.rs    - Marking messages read
//! ├── conversations.rs - Conversation list projection
//! ├── history.rs       - Message history between two users
//! └── handlers.rs      - HTTP handlers
//! ```

pub mod db;
pub mod resolver;
pub mod dispatcher;
pub mod read_state;
pub mod conversations;
pub mod history;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::MessageDispatcher;
pub use resolver::{resolve_conversation, find_conversation};
pub use read_state::mark_read;
pub use conversations::list_conversations;
pub use history::message_history;
