//! Authentication test helpers
//!
//! Users are seeded directly in the database; tokens are signed with the
//! same secret the test app verifies with.

use sqlx::SqlitePool;

use directmsg::backend::auth::sessions::create_token;
use directmsg::backend::auth::users::{create_user, User};

/// Secret shared by `test_config` and the token helpers
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A seeded user and a valid token for them
pub struct TestUser {
    pub user: User,
    pub token: String,
}

impl TestUser {
    pub fn id(&self) -> uuid::Uuid {
        self.user.id
    }
}

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> TestUser {
    let email = format!("{}@example.com", username);
    let user = create_user(pool, username, &email, "")
        .await
        .expect("Failed to create test user");
    let token = generate_test_token(&user);
    TestUser { user, token }
}

/// Generate a test JWT token
pub fn generate_test_token(user: &User) -> String {
    create_token(TEST_JWT_SECRET, user.id, user.email.clone()).expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
