/**
 * User Lookups
 *
 * Users belong to the identity subsystem. The messaging core only reads them:
 * to check that a message target exists and to project public profiles into
 * conversation views. `create_user` exists for seeding.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::backend::messaging::db::decode_timestamp;
use crate::shared::clock;
use crate::shared::messaging::UserPublicProfile;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Avatar URL, empty when unset
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public fields of this user
    pub fn public_profile(&self) -> UserPublicProfile {
        UserPublicProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        avatar: row.try_get("avatar")?,
        created_at: decode_timestamp(row, "created_at")?,
    })
}

/// Create a new user
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    avatar: &str,
) -> Result<User, sqlx::Error> {
    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
        created_at: clock::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, avatar, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.avatar)
    .bind(clock::to_micros(user.created_at))
    .execute(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, username, email, avatar, created_at
        FROM users
        WHERE id = ?
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(user_from_row).transpose()
}
