//! Failure handling of the send path
//!
//! Storage failures are injected with triggers that abort inserts into a
//! given table.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use common::*;
use directmsg::backend::error::{BackendError, STORAGE_ERROR_MESSAGE};
use directmsg::backend::messaging::{find_conversation, MessageDispatcher};
use directmsg::backend::realtime::{Notifier, NotifyError};
use directmsg::shared::messaging::{Message, SendMessageRequest};
use directmsg::shared::MessagingConfig;

struct ClosedNotifier;

impl Notifier for ClosedNotifier {
    fn publish(&self, _message: &Message) -> Result<usize, NotifyError> {
        Err(NotifyError::Transport("subscriber gone".to_string()))
    }
}

fn request(target: Uuid, body: &str) -> SendMessageRequest {
    SendMessageRequest {
        target_user_id: target.to_string(),
        body: body.to_string(),
    }
}

#[tokio::test]
async fn test_message_insert_failure_leaves_no_reference() {
    let db = TestDatabase::new().await;
    let (state, _) = test_app(&db);
    let alice = create_test_user(db.pool(), "alice").await;
    let bob = create_test_user(db.pool(), "bob").await;

    db.fail_inserts_into("messages").await;

    assert_err!(
        state.dispatcher.send(alice.id(), &request(bob.id(), "hi")).await,
        BackendError::Storage(_)
    );

    assert_eq!(db.count("messages").await, 0);
    assert_eq!(db.count("conversation_messages").await, 0);
    if let Some(conversation) = find_conversation(db.pool(), alice.id(), bob.id()).await.unwrap() {
        assert!(conversation.messages.is_empty());
    }
}

#[tokio::test]
async fn test_append_failure_orphans_message() {
    let db = TestDatabase::new().await;
    let (state, _) = test_app(&db);
    let alice = create_test_user(db.pool(), "alice").await;
    let bob = create_test_user(db.pool(), "bob").await;

    db.fail_inserts_into("conversation_messages").await;

    assert_err!(
        state.dispatcher.send(alice.id(), &request(bob.id(), "hi")).await,
        BackendError::Storage(_)
    );

    // Stored but not linked.
    assert_eq!(db.count("messages").await, 1);
    let conversation = find_conversation(db.pool(), alice.id(), bob.id()).await.unwrap().unwrap();
    assert!(conversation.messages.is_empty());
    assert_eq!(conversation.created_at, conversation.updated_at);
}

#[tokio::test]
async fn test_append_failure_without_retries() {
    let db = TestDatabase::new().await;
    let alice = create_test_user(db.pool(), "alice").await;
    let bob = create_test_user(db.pool(), "bob").await;
    let config = MessagingConfig::builder().append_retries(0).build().unwrap();
    let dispatcher = MessageDispatcher::new(db.pool().clone(), Arc::new(ClosedNotifier), config);

    db.fail_inserts_into("conversation_messages").await;

    assert_err!(dispatcher.send(alice.id(), &request(bob.id(), "hi")).await, BackendError::Storage(_));
    assert_eq!(db.count("messages").await, 1);
}

#[tokio::test]
async fn test_notifier_failure_is_swallowed() {
    let db = TestDatabase::new().await;
    let alice = create_test_user(db.pool(), "alice").await;
    let bob = create_test_user(db.pool(), "bob").await;
    let dispatcher = MessageDispatcher::new(db.pool().clone(), Arc::new(ClosedNotifier), MessagingConfig::default());

    let message = assert_ok!(dispatcher.send(alice.id(), &request(bob.id(), "hi")).await);

    let conversation = find_conversation(db.pool(), alice.id(), bob.id()).await.unwrap().unwrap();
    assert_eq!(conversation.messages, vec![message.id]);
}

#[tokio::test]
async fn test_storage_failure_response_is_generic() {
    let db = TestDatabase::new().await;
    let (_, app) = test_app(&db);
    let alice = create_test_user(db.pool(), "alice").await;
    let bob = create_test_user(db.pool(), "bob").await;

    db.fail_inserts_into("messages").await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/messages")
                .header(header::AUTHORIZATION, auth_header(&alice.token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "targetUserId": bob.id(), "body": "hi" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();
    assert_error_envelope!(body, 500);
    assert_eq!(body["message"], json!(STORAGE_ERROR_MESSAGE));
    assert!(!body.to_string().contains("insert disabled"));
}
