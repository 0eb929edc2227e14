//! Backend Error Module
//!
//! Error types of the messaging core and their conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return it directly.
//! The response body is the shared JSON envelope with `success: false`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, STORAGE_ERROR_MESSAGE};

/// Result alias used across the backend
pub type BackendResult<T> = Result<T, BackendError>;
