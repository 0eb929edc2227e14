//! Conversation List Builder
//!
//! Projects the rows of the conversation list query into `ConversationView`s.
//! Ordering comes from the query: most recent activity first, ties broken by
//! conversation id.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::db::{self, ConversationListRow};
use crate::backend::error::BackendResult;
use crate::shared::messaging::ConversationView;

/// Every conversation of `user_id`, newest activity first
#[tracing::instrument(skip(pool))]
pub async fn list_conversations(pool: &SqlitePool, user_id: Uuid) -> BackendResult<Vec<ConversationView>> {
    let rows = db::list_conversation_rows(pool, user_id).await?;
    Ok(rows.into_iter().filter_map(into_view).collect())
}

fn into_view(row: ConversationListRow) -> Option<ConversationView> {
    let Some(other_participant) = row.other_participant else {
        tracing::warn!(
            "Conversation {} references missing user {}, skipping",
            row.conversation_id,
            row.other_participant_id
        );
        return None;
    };

    Some(ConversationView {
        conversation_id: row.conversation_id,
        other_participant,
        last_message: row.last_message,
        unread_count: u32::try_from(row.unread_count).unwrap_or(u32::MAX),
        updated_at: row.updated_at,
    })
}
