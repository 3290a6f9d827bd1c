//! HTTP router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//!
//! Layers (outermost → innermost): CORS → trace span → request log →
//! 405 rewriter → handler.

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the service router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/diagnose", post(endpoints::diagnose::diagnose))
        .route("/diagnose/local", post(endpoints::diagnose::diagnose_local))
        .route(
            "/chat/:patient_id/messages",
            get(endpoints::chat::messages).post(endpoints::chat::post_message),
        )
        .route("/doctor/chats", get(endpoints::doctor::conversations))
        .route(
            "/doctor/chats/:patient_id/messages",
            get(endpoints::doctor::messages).post(endpoints::doctor::post_message),
        );

    Router::new()
        .route("/", get(endpoints::health::index))
        .nest("/api", api)
        .fallback(not_found)
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::errors::structure_method_not_allowed))
        .layer(axum::middleware::from_fn(middleware::logging::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
