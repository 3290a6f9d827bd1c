pub mod api;
pub mod chat; // Patient chat store + assistant
pub mod config;
pub mod diagnosis; // Local rule-based classifier
pub mod engine; // Remote-first diagnosis with local fallback
pub mod ml_service;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{start_server_on, ApiContext, ServerError};
use crate::chat::InMemoryChatStore;
use crate::config::{AppConfig, ConfigError};
use crate::ml_service::MlServiceError;

/// Errors that stop the service from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("ML service client error: {0}")]
    MlService(#[from] MlServiceError),
    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Build the shared API state described by `config`.
pub fn build_context(config: &AppConfig) -> Result<ApiContext, StartupError> {
    let engine = config.build_engine()?;
    let store = Arc::new(InMemoryChatStore::with_history_limit(config.chat_history_limit));
    Ok(ApiContext::new(engine, store))
}

/// Run the service until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let ctx = build_context(&config)?;
    let mut server = start_server_on(ctx, config.bind_addr()).await?;

    tracing::info!(
        addr = %server.session.server_addr,
        ml_service = config.ml_service_url.as_deref().unwrap_or("disabled"),
        "{} listening",
        config::APP_NAME
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }

    server.shutdown();
    server.stopped().await;
    Ok(())
}
