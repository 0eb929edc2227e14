//! Identity Module
//!
//! The boundary to the identity subsystem. Registration, password handling
//! and token issuance live elsewhere; this module only verifies bearer tokens
//! and reads user records.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and lookups
//! └── sessions.rs     - JWT verification
//! ```

/// User data model and database operations
pub mod users;

/// JWT token validation
pub mod sessions;

pub use users::{User, get_user_by_id, create_user};
pub use sessions::{Claims, verify_token, create_token};
