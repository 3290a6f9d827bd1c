//! Client seam for the external ML diagnosis service.
//!
//! The service exposes `POST {base}/diagnose` taking `{ "symptoms": text }`
//! and returning a diagnosis payload. Any failure here is recoverable:
//! the engine falls back to the local classifier.

use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlServiceError {
    #[error("ML service unreachable at {0}")]
    Connection(String),

    #[error("ML service timed out after {0:?}")]
    Timeout(Duration),

    #[error("ML service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Diagnosis as reported by the remote service.
///
/// Field names follow the service's JSON. Everything but `diagnosis`
/// is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDiagnosis {
    pub diagnosis: String,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default = "default_needs_doctor")]
    pub needs_doctor: bool,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub identified_symptoms: Vec<String>,
}

fn default_needs_doctor() -> bool {
    true
}

/// Anything that can produce a remote diagnosis.
#[async_trait::async_trait]
pub trait RemoteDiagnoser: Send + Sync {
    async fn diagnose(&self, symptoms: &str) -> Result<RemoteDiagnosis, MlServiceError>;

    /// Human-readable identifier for logs.
    fn name(&self) -> &str;
}

#[derive(Serialize)]
struct DiagnoseRequest<'a> {
    symptoms: &'a str,
}

/// HTTP client for the ML diagnosis service.
pub struct MlServiceClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl MlServiceClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MlServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MlServiceError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl RemoteDiagnoser for MlServiceClient {
    async fn diagnose(&self, symptoms: &str) -> Result<RemoteDiagnosis, MlServiceError> {
        let url = format!("{}/diagnose", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&DiagnoseRequest { symptoms })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MlServiceError::Timeout(self.timeout)
                } else if e.is_connect() {
                    MlServiceError::Connection(self.base_url.clone())
                } else {
                    MlServiceError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MlServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<RemoteDiagnosis>()
            .await
            .map_err(|e| MlServiceError::ResponseParsing(e.to_string()))
    }

    fn name(&self) -> &str {
        &self.base_url
    }
}

/// Canned remote for tests: replies with a fixed outcome, optionally
/// after a delay, and records every request.
pub struct MockRemoteDiagnoser {
    reply: Result<RemoteDiagnosis, String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockRemoteDiagnoser {
    pub fn answering(diagnosis: RemoteDiagnosis) -> Self {
        Self {
            reply: Ok(diagnosis),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Symptom strings received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl RemoteDiagnoser for MockRemoteDiagnoser {
    async fn diagnose(&self, symptoms: &str) -> Result<RemoteDiagnosis, MlServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(symptoms.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Ok(diagnosis) => Ok(diagnosis.clone()),
            Err(reason) => Err(MlServiceError::HttpClient(reason.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
