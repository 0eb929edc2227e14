//! Message History Reader
//!
//! The most recent messages between two users, newest first. Read-only: a
//! missing conversation yields an empty history and is never created here.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::config::MessagingConfig;
use crate::shared::messaging::{Message, ParticipantPair};

/// Up to `limit` most recent messages exchanged by `user_id` and `peer_id`
///
/// `None` uses the configured default; limits above the configured maximum
/// are clamped and a zero limit is rejected.
#[tracing::instrument(skip(pool, config))]
pub async fn message_history(
    pool: &SqlitePool,
    config: &MessagingConfig,
    user_id: Uuid,
    peer_id: Uuid,
    limit: Option<u32>,
) -> BackendResult<Vec<Message>> {
    let limit = config.effective_history_limit(limit);
    if limit == 0 {
        return Err(BackendError::validation("limit must be at least 1"));
    }

    let Some(pair) = ParticipantPair::new(user_id, peer_id) else {
        return Ok(Vec::new());
    };

    let Some(conversation_id) = db::find_conversation_id(pool, &pair).await? else {
        return Ok(Vec::new());
    };

    Ok(db::get_conversation_messages(pool, conversation_id, limit).await?)
}
