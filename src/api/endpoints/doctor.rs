//! Doctor-side chat endpoints.
//!
//! - `GET /api/doctor/chats`: one summary per patient conversation
//! - `GET /api/doctor/chats/:patient_id/messages`: a patient's history
//! - `POST /api/doctor/chats/:patient_id/messages`: reply as the doctor.
//!   Doctor messages never trigger an assistant reply.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::endpoints::chat::{store_message, MessagesResponse, PostMessageRequest, PostMessageResponse};
use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::models::{ConversationSummary, MessageSender};

#[derive(Serialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<ConversationSummary>,
}

/// `GET /api/doctor/chats`
pub async fn conversations(State(ctx): State<ApiContext>) -> Result<Json<ConversationsResponse>, ApiError> {
    let conversations = ctx.chat_store.conversations()?;
    Ok(Json(ConversationsResponse { conversations }))
}

/// `GET /api/doctor/chats/:patient_id/messages`
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

/// `POST /api/doctor/chats/:patient_id/messages`
pub async fn post_message(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<String>,
    ApiJson(req): ApiJson<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, ApiError> {
    let message = store_message(&ctx, &patient_id, MessageSender::Doctor, &req.text)?;
    tracing::info!(%patient_id, "Doctor message stored");

    Ok(Json(PostMessageResponse {
        success: true,
        message,
    }))
}
