/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Messages
 * - `POST /api/messages` - Send a message
 * - `GET /api/messages/{peer_id}` - History with a peer, `?limit=N`
 * - `PATCH /api/messages/{message_id}/read` - Mark a message read
 * - `POST /api/messages/update-status` - Mark a message read, `{messageId}` body
 *
 * ## Conversations
 * - `GET /api/conversations` - Conversation list of the caller
 *
 * All routes require a bearer token.
 */

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::backend::messaging::handlers::{
    get_conversations, get_message_history, mark_message_read, send_message, update_message_status,
};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Message endpoints
        .route("/api/messages", post(send_message))
        .route("/api/messages/update-status", post(update_message_status))
        // `{id}` is the peer id here and the message id below; both segments
        // must share one parameter name.
        .route("/api/messages/{id}", get(get_message_history))
        .route("/api/messages/{id}/read", patch(mark_message_read))
        // Conversations endpoint
        .route("/api/conversations", get(get_conversations))
}
