use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::engine::DiagnosisEngine;
use crate::ml_service::{MlServiceClient, MlServiceError};

/// Application-level constants
pub const APP_NAME: &str = "MediDiag";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ML_SERVICE_URL: &str = "http://localhost:5000";
pub const DEFAULT_ML_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CHAT_HISTORY_LIMIT: usize = 200;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medidiag=info,tower_http=info"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// `None` disables the remote ML service.
    pub ml_service_url: Option<String>,
    pub ml_timeout: Duration,
    /// Zero means unbounded.
    pub chat_history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            ml_service_url: Some(DEFAULT_ML_SERVICE_URL.to_string()),
            ml_timeout: Duration::from_secs(DEFAULT_ML_TIMEOUT_SECS),
            chat_history_limit: DEFAULT_CHAT_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Read from the process environment (after `.env`, if loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary key lookup. Unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let ml_timeout_secs = parse_or(&lookup, "ML_TIMEOUT_SECS", DEFAULT_ML_TIMEOUT_SECS)?;
        let chat_history_limit = parse_or(&lookup, "CHAT_HISTORY_LIMIT", DEFAULT_CHAT_HISTORY_LIMIT)?;

        if ml_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ML_TIMEOUT_SECS",
                value: "0".into(),
            });
        }

        // Set-but-empty disables the remote; unset keeps the default.
        let ml_service_url = match lookup("ML_SERVICE_URL").map(|u| u.trim().to_string()) {
            None => Some(DEFAULT_ML_SERVICE_URL.to_string()),
            Some(url) if url.is_empty() => None,
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => Some(url),
            Some(url) => {
                return Err(ConfigError::InvalidValue {
                    key: "ML_SERVICE_URL",
                    value: url,
                })
            }
        };

        Ok(Self {
            host,
            port,
            ml_service_url,
            ml_timeout: Duration::from_secs(ml_timeout_secs),
            chat_history_limit,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the diagnosis engine this config describes.
    pub fn build_engine(&self) -> Result<DiagnosisEngine, MlServiceError> {
        match &self.ml_service_url {
            None => Ok(DiagnosisEngine::local_only()),
            Some(url) => {
                let client = MlServiceClient::new(url, self.ml_timeout)?;
                Ok(DiagnosisEngine::with_remote(Arc::new(client), self.ml_timeout))
            }
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        _ => Ok(default),
    }
}
