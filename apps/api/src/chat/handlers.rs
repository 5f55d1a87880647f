//! Axum route handlers for the chat API.

use axum::{extract::State, Json};

use super::models::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat/message
///
/// Total from the client's perspective: AI failures surface as a successful
/// response carrying the apology text.
pub async fn handle_chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state
        .chat
        .reply(&request.message, request.history.as_deref())
        .await;
    Json(ChatResponse::ok(reply))
}
