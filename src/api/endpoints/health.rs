//! Service index and health check.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config::{APP_NAME, APP_VERSION};

pub const ENDPOINTS: &[&str] = &[
    "/api/health",
    "/api/diagnose",
    "/api/diagnose/local",
    "/api/chat/:patient_id/messages",
    "/api/doctor/chats",
    "/api/doctor/chats/:patient_id/messages",
];

#[derive(Serialize)]
pub struct IndexResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// `GET /`: service index.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: APP_NAME,
        status: "ok",
        version: APP_VERSION,
        endpoints: ENDPOINTS,
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub remote_configured: bool,
}

/// `GET /api/health`: liveness check.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: APP_VERSION,
        remote_configured: ctx.engine.has_remote(),
    })
}
