//! Rewrites axum's bare 405 responses into the structured error body.

use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;

pub async fn structure_method_not_allowed(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut structured = ApiError::MethodNotAllowed(format!("{method} not allowed on {path}")).into_response();
    if let Some(allow) = allow {
        structured.headers_mut().insert(header::ALLOW, allow);
    }
    structured
}
