/**
 * Message Dispatcher
 *
 * The send path. A send validates the request, resolves the conversation,
 * stores the message, links it into the conversation and finally notifies
 * subscribers.
 *
 * # Failure Semantics
 *
 * - Anything failing before the message insert commits nothing.
 * - If the message is stored but linking it into the conversation keeps
 *   failing after the configured retries, the send fails with a storage
 *   error and the message stays recorded but unlinked.
 * - Notifier failures are logged and never fail the send.
 */

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use uuid::Uuid;

use super::{db, resolver};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::realtime::Notifier;
use crate::shared::clock;
use crate::shared::config::MessagingConfig;
use crate::shared::messaging::{Message, SendMessageRequest};

/// Base delay between append attempts, multiplied by the attempt number
const APPEND_RETRY_DELAY: Duration = Duration::from_millis(10);

/// Sends messages between users
#[derive(Clone)]
pub struct MessageDispatcher {
    pool: SqlitePool,
    notifier: Arc<dyn Notifier>,
    config: MessagingConfig,
}

impl MessageDispatcher {
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>, config: MessagingConfig) -> Self {
        Self {
            pool,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &MessagingConfig {
        &self.config
    }

    /// Send a message from `sender_id` to the request's target user
    #[tracing::instrument(skip(self, request), fields(target = %request.target_user_id))]
    pub async fn send(&self, sender_id: Uuid, request: &SendMessageRequest) -> BackendResult<Message> {
        let target_id = request.validate(self.config.max_body_len)?;

        if get_user_by_id(&self.pool, target_id).await?.is_none() {
            return Err(BackendError::not_found("target user"));
        }

        if target_id == sender_id {
            return Err(BackendError::validation("cannot message self"));
        }

        let message = Message::new(sender_id, target_id, request.body.clone());
        let conversation = resolver::resolve_conversation(&self.pool, sender_id, target_id).await?;

        db::insert_message(&self.pool, &message).await?;
        self.append_with_retry(conversation.id, message.id).await?;

        tracing::info!(
            message_id = %message.id,
            conversation_id = %conversation.id,
            "Message stored"
        );

        self.notify(&message);
        Ok(message)
    }

    async fn append_with_retry(&self, conversation_id: Uuid, message_id: Uuid) -> BackendResult<()> {
        let mut attempt = 0;
        loop {
            match db::append_message_ref(&self.pool, conversation_id, message_id, clock::now()).await {
                Ok(seq) => {
                    tracing::debug!("Appended message {} at seq {}", message_id, seq);
                    return Ok(());
                }
                Err(e) if attempt < self.config.append_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Append of message {} to conversation {} failed (attempt {}): {:?}",
                        message_id,
                        conversation_id,
                        attempt,
                        e
                    );
                    tokio::time::sleep(APPEND_RETRY_DELAY * attempt).await;
                }
                Err(e) => {
                    tracing::error!(
                        "Message {} stored but not linked to conversation {}: {:?}",
                        message_id,
                        conversation_id,
                        e
                    );
                    return Err(BackendError::Storage(e));
                }
            }
        }
    }

    fn notify(&self, message: &Message) {
        match self.notifier.publish(message) {
            Ok(delivered) => tracing::debug!("Message {} delivered to {} subscribers", message.id, delivered),
            Err(e) => tracing::warn!("Failed to notify subscribers of message {}: {}", message.id, e),
        }
    }
}
