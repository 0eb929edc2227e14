//! Messaging HTTP Handlers
//!
//! Thin adapters from HTTP to the messaging components. Each handler
//! authenticates the caller, decodes the request, calls one component and
//! wraps the result in the `ApiResponse` envelope. Malformed JSON or query
//! strings are reported as validation errors in the same envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use uuid::Uuid;

use super::{conversations, history, read_state};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::messaging::{
    parse_user_id, ConversationView, HistoryParams, MarkReadRequest, Message, SendMessageRequest,
};
use crate::shared::ApiResponse;

fn parse_id(field: &str, raw: &str) -> BackendResult<Uuid> {
    Ok(parse_user_id(field, raw)?)
}

/// Send a message (POST /api/messages)
pub async fn send_message(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> BackendResult<Json<ApiResponse<Message>>> {
    let Json(request) = payload.map_err(|e| BackendError::validation(e.body_text()))?;

    let message = state.dispatcher.send(user.user_id, &request).await?;
    Ok(Json(ApiResponse::ok("Message sent", message)))
}

/// Message history with a peer (GET /api/messages/{peer_id})
pub async fn get_message_history(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(peer_id): Path<String>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> BackendResult<Json<ApiResponse<Vec<Message>>>> {
    let Query(params) = params.map_err(|e| BackendError::validation(e.body_text()))?;
    let peer_id = parse_id("peer_id", &peer_id)?;

    let messages = history::message_history(
        &state.pool,
        &state.config.messaging,
        user.user_id,
        peer_id,
        params.limit,
    )
    .await?;

    Ok(Json(ApiResponse::ok("Success", messages)))
}

/// Mark a message as read (PATCH /api/messages/{message_id}/read)
pub async fn mark_message_read(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(message_id): Path<String>,
) -> BackendResult<Json<ApiResponse<Message>>> {
    let message_id = parse_id("message_id", &message_id)?;

    let message = read_state::mark_read(&state.pool, user.user_id, message_id).await?;
    Ok(Json(ApiResponse::ok("Message marked as read", message)))
}

/// Mark a message as read (POST /api/messages/update-status)
pub async fn update_message_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<MarkReadRequest>, JsonRejection>,
) -> BackendResult<Json<ApiResponse<Message>>> {
    let Json(request) = payload.map_err(|e| BackendError::validation(e.body_text()))?;
    let message_id = parse_id("message_id", &request.message_id)?;

    let message = read_state::mark_read(&state.pool, user.user_id, message_id).await?;
    Ok(Json(ApiResponse::ok("Message marked as read", message)))
}

/// Conversation list of the caller (GET /api/conversations)
pub async fn get_conversations(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> BackendResult<Json<ApiResponse<Vec<ConversationView>>>> {
    let views = conversations::list_conversations(&state.pool, user.user_id).await?;
    Ok(Json(ApiResponse::ok("Success", views)))
}
