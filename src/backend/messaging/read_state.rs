//! Read-State Tracker
//!
//! Only the receiver of a message may mark it read. Marking an already-read
//! message is a no-op that returns it unchanged.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::clock;
use crate::shared::messaging::Message;

#[tracing::instrument(skip(pool))]
pub async fn mark_read(pool: &SqlitePool, caller_id: Uuid, message_id: Uuid) -> BackendResult<Message> {
    let message = db::get_message(pool, message_id)
        .await?
        .ok_or_else(|| BackendError::not_found("message"))?;

    if message.receiver_id != caller_id {
        tracing::warn!("User {} tried to mark message {} they did not receive", caller_id, message_id);
        return Err(BackendError::forbidden("only the receiver can mark a message as read"));
    }

    if message.is_read {
        return Ok(message);
    }

    let at = clock::now();
    if db::set_message_read(pool, message_id, at).await? == 0 {
        // Marked read concurrently; return the stored state.
        return db::get_message(pool, message_id)
            .await?
            .ok_or_else(|| BackendError::not_found("message"));
    }

    tracing::info!("Message {} marked read", message_id);
    Ok(Message {
        is_read: true,
        updated_at: at,
        ..message
    })
}
