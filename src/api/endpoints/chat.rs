//! Patient chat endpoints.
//!
//! - `GET /api/chat/:patient_id/messages`: full history, oldest first
//! - `POST /api/chat/:patient_id/messages`: store a patient message;
//!   the assistant reply is generated in the background and appended
//!   to the same history.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::chat::validate_message;
use crate::models::{ChatMessage, MessageSender};

#[derive(Serialize)]
pub struct MessagesResponse {
    pub patient_id: String,
    pub messages: Vec<ChatMessage>,
}

/// `GET /api/chat/:patient_id/messages`
pub async fn messages(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = ctx.chat_store.messages(&patient_id)?;
    Ok(Json(MessagesResponse {
        patient_id,
        messages,
    }))
}

/// Validate `text` and append it to the patient's history as `sender`.
pub(crate) fn store_message(
    ctx: &ApiContext,
    patient_id: &str,
    sender: MessageSender,
    text: &str,
) -> Result<ChatMessage, ApiError> {
    let message = ChatMessage::new(sender, validate_message(text)?);
    ctx.chat_store.append(patient_id, message.clone())?;
    Ok(message)
}

#[derive(Deserialize)]
pub struct PostMessageRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct PostMessageResponse {
    pub success: bool,
    pub message: ChatMessage,
}

/// `POST /api/chat/:patient_id/messages`
pub async fn post_message(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
    ApiJson(req): ApiJson<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, ApiError> {
    let message = store_message(&ctx, &patient_id, MessageSender::Patient, &req.text)?;
    let text = message.text.clone();

    let assistant = ctx.assistant.clone();
    let store = ctx.chat_store.clone();
    let reply_for = patient_id.clone();
    tokio::spawn(async move {
        let reply = assistant.reply(&text).await;
        if let Err(e) = store.append(&reply_for, ChatMessage::new(MessageSender::Ai, reply)) {
            tracing::error!(patient_id = %reply_for, error = %e, "Failed to store assistant reply");
        }
    });

    Ok(Json(PostMessageResponse {
        success: true,
        message,
    }))
}
