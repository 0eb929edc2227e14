/**
 * Backend Error Types
 *
 * The error taxonomy of the messaging core. Every component returns these as
 * typed results; the HTTP layer renders them through `IntoResponse`.
 *
 * # Error Categories
 *
 * - `Validation` - malformed or missing input, user-correctable (400)
 * - `NotFound` - target user or message absent (404)
 * - `Forbidden` - an authorization invariant was violated (403)
 * - `Unauthorized` - no valid caller identity (401)
 * - `Storage` - the underlying persistence failed (500)
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Message returned to clients for storage failures
pub const STORAGE_ERROR_MESSAGE: &str = "internal storage error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use directmsg::backend::error::BackendError;
///
/// let err = BackendError::validation("cannot message self");
/// let err = BackendError::not_found("target user");
/// let err = BackendError::forbidden("only the receiver can mark a message as read");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// A referenced entity does not exist
    #[error("{what} not found")]
    NotFound {
        /// What was looked up, e.g. "target user"
        what: String,
    },

    /// The caller may not perform this operation
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid caller identity
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Underlying persistence failure
    ///
    /// The wrapped error is logged, never shown to clients.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Shared error (from payload validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error for `what`
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Forbidden` - 403 Forbidden
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Storage` - 500 Internal Server Error
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    ///
    /// Storage errors are reduced to a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::NotFound { what } => format!("{} not found", what),
            Self::Forbidden { message } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Storage(_) => STORAGE_ERROR_MESSAGE.to_string(),
            Self::SharedError(err) => err.client_message(),
        }
    }
}
