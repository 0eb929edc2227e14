//! Shared Error Types
//!
//! Errors raised by the shared types themselves, before any storage is
//! touched: malformed identifiers, empty or oversized message bodies, bad
//! query parameters.
//!
//! # Usage
//!
//! ```rust
//! use directmsg::shared::error::SharedError;
//!
//! let error = SharedError::validation("body", "message body cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types raised while validating client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message suitable for the client, without the variant prefix
    pub fn client_message(&self) -> String {
        let Self::ValidationError { field, message } = self;
        format!("{}: {}", field, message)
    }
}
