//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token verification and the `AuthUser` extractor

pub mod auth;

pub use auth::{AuthenticatedUser, AuthUser, authenticate};
