//! Conversation Resolver
//!
//! Find-or-create of the single conversation between two users. The pair is
//! normalized before any lookup, so `(a, b)` and `(b, a)` hit the same row,
//! and the unique key on that pair settles concurrent creators.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::clock;
use crate::shared::messaging::{Conversation, ParticipantPair};

/// Find the conversation between two users without creating one
pub async fn find_conversation(
    pool: &SqlitePool,
    user_a: Uuid,
    user_b: Uuid,
) -> BackendResult<Option<Conversation>> {
    let Some(pair) = ParticipantPair::new(user_a, user_b) else {
        return Ok(None);
    };
    Ok(db::find_conversation_by_pair(pool, &pair).await?)
}

/// Return the conversation between `user_a` and `user_b`, creating it if absent
///
/// Writes at most one conversation. A user cannot have a conversation with
/// themselves; that case is rejected with a validation error.
#[tracing::instrument(skip(pool))]
pub async fn resolve_conversation(
    pool: &SqlitePool,
    user_a: Uuid,
    user_b: Uuid,
) -> BackendResult<Conversation> {
    let pair = ParticipantPair::new(user_a, user_b)
        .ok_or_else(|| BackendError::validation("cannot message self"))?;

    if let Some(conversation) = db::find_conversation_by_pair(pool, &pair).await? {
        return Ok(conversation);
    }

    let created = db::insert_conversation_if_absent(pool, Uuid::new_v4(), &pair, clock::now()).await?;
    if created {
        tracing::info!("Created conversation for {} and {}", pair.low(), pair.high());
    } else {
        tracing::debug!("Conversation created concurrently, reusing it");
    }

    // The row exists now, whoever inserted it.
    db::find_conversation_by_pair(pool, &pair)
        .await?
        .ok_or(BackendError::Storage(sqlx::Error::RowNotFound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::messaging::test_support::TestDb;

    #[tokio::test]
    async fn test_resolve_creates_then_reuses() {
        let db = TestDb::new().await;
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let first = resolve_conversation(db.pool(), a, b).await.unwrap();
        assert!(first.messages.is_empty());
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(first.participants, ParticipantPair::new(a, b).unwrap().as_array());

        let second = resolve_conversation(db.pool(), b, a).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_rejects_self() {
        let db = TestDb::new().await;
        let a = Uuid::new_v4();
        assert!(matches!(
            resolve_conversation(db.pool(), a, a).await,
            Err(BackendError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_find_does_not_create() {
        let db = TestDb::new().await;
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert!(find_conversation(db.pool(), a, b).await.unwrap().is_none());
        assert!(find_conversation(db.pool(), a, b).await.unwrap().is_none());
        assert!(find_conversation(db.pool(), a, a).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_resolve_yields_one_conversation() {
        let db = TestDb::new().await;
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pool = db.pool().clone();
                tokio::spawn(async move {
                    if i % 2 == 0 {
                        resolve_conversation(&pool, a, b).await
                    } else {
                        resolve_conversation(&pool, b, a).await
                    }
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);
    }
}
