//! Database operations for messaging
//!
//! Storage of messages, conversations and the ordered message references that
//! link them. Timestamps are INTEGER microseconds; ids are UUID blobs.
//!
//! A conversation's `messages` sequence lives in `conversation_messages`,
//! keyed by `(conversation_id, seq)`. Appending is a single
//! `INSERT .. SELECT MAX(seq) + 1` statement, so concurrent senders never
//! overwrite each other's references.

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::shared::clock;
use crate::shared::messaging::{Conversation, Message, ParticipantPair, UserPublicProfile};

/// Decode an INTEGER microsecond column into a timestamp
pub fn decode_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let micros: i64 = row.try_get(column)?;
    clock::from_micros(micros).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("timestamp {} out of range", micros).into(),
    })
}

fn message_from_row(row: &SqliteRow) -> Result<Message, sqlx::Error> {
    Ok(Message {
        id: row.try_get("id")?,
        sender_id: row.try_get("sender_id")?,
        receiver_id: row.try_get("receiver_id")?,
        body: row.try_get("body")?,
        is_read: row.try_get("is_read")?,
        created_at: decode_timestamp(row, "created_at")?,
        updated_at: decode_timestamp(row, "updated_at")?,
    })
}

/// Store a message in the database
pub async fn insert_message(pool: &SqlitePool, message: &Message) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO messages (id, sender_id, receiver_id, body, is_read, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#
    )
    .bind(message.id)
    .bind(message.sender_id)
    .bind(message.receiver_id)
    .bind(&message.body)
    .bind(message.is_read)
    .bind(clock::to_micros(message.created_at))
    .bind(clock::to_micros(message.updated_at))
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a message by ID
pub async fn get_message(
    pool: &SqlitePool,
    message_id: Uuid,
) -> Result<Option<Message>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, sender_id, receiver_id, body, is_read, created_at, updated_at
        FROM messages
        WHERE id = ?
        "#
    )
    .bind(message_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(message_from_row).transpose()
}

/// Mark a message as read
///
/// Only touches rows that are still unread; returns the number of rows changed.
pub async fn set_message_read(
    pool: &SqlitePool,
    message_id: Uuid,
    at: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE messages SET is_read = 1, updated_at = ? WHERE id = ? AND is_read = 0
        "#
    )
    .bind(clock::to_micros(at))
    .bind(message_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Ordered message references of a conversation
pub async fn get_message_refs(
    pool: &SqlitePool,
    conversation_id: Uuid,
) -> Result<Vec<Uuid>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT message_id FROM conversation_messages WHERE conversation_id = ? ORDER BY seq ASC
        "#
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(|row| row.try_get("message_id")).collect()
}

/// Find the conversation between the two users of `pair`
pub async fn find_conversation_by_pair(
    pool: &SqlitePool,
    pair: &ParticipantPair,
) -> Result<Option<Conversation>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, created_at, updated_at
        FROM conversations
        WHERE participant_low = ? AND participant_high = ?
        "#
    )
    .bind(pair.low())
    .bind(pair.high())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let id: Uuid = row.try_get("id")?;
    let messages = get_message_refs(pool, id).await?;

    Ok(Some(Conversation {
        id,
        participants: pair.as_array(),
        messages,
        created_at: decode_timestamp(&row, "created_at")?,
        updated_at: decode_timestamp(&row, "updated_at")?,
    }))
}

/// Id of the conversation between the two users of `pair`, without its references
pub async fn find_conversation_id(
    pool: &SqlitePool,
    pair: &ParticipantPair,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT id FROM conversations WHERE participant_low = ? AND participant_high = ?
        "#
    )
    .bind(pair.low())
    .bind(pair.high())
    .fetch_optional(pool)
    .await
}

/// Insert a conversation for `pair` unless one already exists
///
/// The unique key on the normalized pair arbitrates concurrent creators.
/// Returns whether this call created the row.
pub async fn insert_conversation_if_absent(
    pool: &SqlitePool,
    conversation_id: Uuid,
    pair: &ParticipantPair,
    at: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO conversations (id, participant_low, participant_high, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (participant_low, participant_high) DO NOTHING
        "#
    )
    .bind(conversation_id)
    .bind(pair.low())
    .bind(pair.high())
    .bind(clock::to_micros(at))
    .bind(clock::to_micros(at))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

/// Append a message reference to a conversation and bump its `updated_at`
///
/// Both writes commit together. Returns the sequence number assigned to the
/// reference; `RowNotFound` if the conversation does not exist.
pub async fn append_message_ref(
    pool: &SqlitePool,
    conversation_id: Uuid,
    message_id: Uuid,
    at: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let seq: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO conversation_messages (conversation_id, seq, message_id)
        SELECT ?1, COALESCE(MAX(seq), 0) + 1, ?2
        FROM conversation_messages
        WHERE conversation_id = ?1
        RETURNING seq
        "#
    )
    .bind(conversation_id)
    .bind(message_id)
    .fetch_one(&mut *tx)
    .await?;

    let updated = sqlx::query(
        r#"
        UPDATE conversations SET updated_at = MAX(updated_at, ?) WHERE id = ?
        "#
    )
    .bind(clock::to_micros(at))
    .bind(conversation_id)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }

    tx.commit().await?;
    Ok(seq)
}

/// Raw row of the conversation list query
#[derive(Debug, Clone)]
pub struct ConversationListRow {
    pub conversation_id: Uuid,
    pub updated_at: DateTime<Utc>,
    pub other_participant_id: Uuid,
    /// `None` when the other participant's user record is missing
    pub other_participant: Option<UserPublicProfile>,
    pub last_message: Option<Message>,
    pub unread_count: i64,
}

fn list_row_from_row(row: &SqliteRow) -> Result<ConversationListRow, sqlx::Error> {
    let other_id: Option<Uuid> = row.try_get("other_id")?;
    let other_participant = match other_id {
        Some(id) => Some(UserPublicProfile {
            id,
            username: row.try_get("other_username")?,
            email: row.try_get("other_email")?,
            avatar: row.try_get("other_avatar")?,
        }),
        None => None,
    };

    let last_id: Option<Uuid> = row.try_get("last_id")?;
    let last_message = match last_id {
        Some(id) => Some(Message {
            id,
            sender_id: row.try_get("last_sender_id")?,
            receiver_id: row.try_get("last_receiver_id")?,
            body: row.try_get("last_body")?,
            is_read: row.try_get("last_is_read")?,
            created_at: decode_timestamp(row, "last_created_at")?,
            updated_at: decode_timestamp(row, "last_updated_at")?,
        }),
        None => None,
    };

    Ok(ConversationListRow {
        conversation_id: row.try_get("conversation_id")?,
        updated_at: decode_timestamp(row, "conversation_updated_at")?,
        other_participant_id: row.try_get("other_participant_id")?,
        other_participant,
        last_message,
        unread_count: row.try_get("unread_count")?,
    })
}

/// Conversations of a user, joined with the other participant and the last message
///
/// Match → join participant → join last reference → project, newest activity
/// first, ties broken by conversation id ascending.
pub async fn list_conversation_rows(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<ConversationListRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT
            c.id AS conversation_id,
            c.updated_at AS conversation_updated_at,
            CASE WHEN c.participant_low = ?1 THEN c.participant_high ELSE c.participant_low END
                AS other_participant_id,
            u.id AS other_id,
            u.username AS other_username,
            u.email AS other_email,
            u.avatar AS other_avatar,
            m.id AS last_id,
            m.sender_id AS last_sender_id,
            m.receiver_id AS last_receiver_id,
            m.body AS last_body,
            m.is_read AS last_is_read,
            m.created_at AS last_created_at,
            m.updated_at AS last_updated_at,
            (
                SELECT COUNT(*)
                FROM conversation_messages cu
                INNER JOIN messages mu ON mu.id = cu.message_id
                WHERE cu.conversation_id = c.id AND mu.receiver_id = ?1 AND mu.is_read = 0
            ) AS unread_count
        FROM conversations c
        LEFT JOIN users u
            ON u.id = CASE WHEN c.participant_low = ?1 THEN c.participant_high ELSE c.participant_low END
        LEFT JOIN conversation_messages cm
            ON cm.conversation_id = c.id
            AND cm.seq = (SELECT MAX(seq) FROM conversation_messages WHERE conversation_id = c.id)
        LEFT JOIN messages m ON m.id = cm.message_id
        WHERE c.participant_low = ?1 OR c.participant_high = ?1
        ORDER BY c.updated_at DESC, c.id ASC
        "#
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(list_row_from_row).collect()
}

/// Most recent messages referenced by a conversation, newest first
pub async fn get_conversation_messages(
    pool: &SqlitePool,
    conversation_id: Uuid,
    limit: u32,
) -> Result<Vec<Message>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT m.id, m.sender_id, m.receiver_id, m.body, m.is_read, m.created_at, m.updated_at
        FROM conversation_messages cm
        INNER JOIN messages m ON m.id = cm.message_id
        WHERE cm.conversation_id = ?
        ORDER BY m.created_at DESC, cm.seq DESC
        LIMIT ?
        "#
    )
    .bind(conversation_id)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    rows.iter().map(message_from_row).collect()
}
