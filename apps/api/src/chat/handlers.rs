//! Axum route handlers for the chat endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::chat::rules::{ChatTurn, OPENING_GREETING};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(State(state): State<AppState>, Json(turn): Json<ChatTurn>) -> Json<ChatReply> {
    Json(ChatReply {
        reply: state.chat.reply(&turn),
    })
}

/// GET /api/v1/chat/greeting
pub async fn handle_greeting() -> Json<ChatReply> {
    Json(ChatReply {
        reply: OPENING_GREETING.to_string(),
    })
}
