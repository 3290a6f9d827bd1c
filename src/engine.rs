//! Remote-first diagnosis with local fallback.
//!
//! The remote ML service is tried within a fixed time budget. Any failure
//! (error status, connection refused, timeout, bad payload) falls through
//! to the local classifier, so callers always get a diagnosis back.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::diagnosis::{self, SymptomInput};
use crate::ml_service::{RemoteDiagnoser, RemoteDiagnosis};
use crate::models::DiagnosisResult;

/// Default remote budget, matching the chat assistant's 5s call.
pub const DEFAULT_REMOTE_BUDGET: Duration = Duration::from_secs(5);

/// Which path produced a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisSource {
    Remote,
    Local,
}

/// Diagnosis payload from either path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiagnosisReport {
    Remote(RemoteDiagnosis),
    Local(DiagnosisResult),
}

impl DiagnosisReport {
    pub fn diagnosis(&self) -> &str {
        match self {
            DiagnosisReport::Remote(r) => &r.diagnosis,
            DiagnosisReport::Local(r) => &r.diagnosis_text,
        }
    }

    pub fn recommendation(&self) -> Option<&str> {
        match self {
            DiagnosisReport::Remote(r) => r.recommendation.as_deref(),
            DiagnosisReport::Local(r) => Some(&r.recommendation_text),
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            DiagnosisReport::Remote(r) => r.confidence,
            DiagnosisReport::Local(r) => r.confidence,
        }
    }

    pub fn needs_doctor(&self) -> bool {
        match self {
            DiagnosisReport::Remote(r) => r.needs_doctor,
            DiagnosisReport::Local(r) => r.needs_doctor,
        }
    }
}

/// A diagnosis tagged with its source; serialized flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisOutcome {
    pub source: DiagnosisSource,
    #[serde(flatten)]
    pub report: DiagnosisReport,
}

impl DiagnosisOutcome {
    pub fn local(result: DiagnosisResult) -> Self {
        Self {
            source: DiagnosisSource::Local,
            report: DiagnosisReport::Local(result),
        }
    }

    pub fn remote(diagnosis: RemoteDiagnosis) -> Self {
        Self {
            source: DiagnosisSource::Remote,
            report: DiagnosisReport::Remote(diagnosis),
        }
    }
}

/// Remote-first diagnosis engine. Cheap to clone.
#[derive(Clone)]
pub struct DiagnosisEngine {
    remote: Option<Arc<dyn RemoteDiagnoser>>,
    budget: Duration,
}

impl DiagnosisEngine {
    /// Engine that only ever uses the local classifier.
    pub fn local_only() -> Self {
        Self {
            remote: None,
            budget: DEFAULT_REMOTE_BUDGET,
        }
    }

    pub fn with_remote(remote: Arc<dyn RemoteDiagnoser>, budget: Duration) -> Self {
        Self {
            remote: Some(remote),
            budget,
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Diagnose with the remote service when possible, locally otherwise.
    ///
    /// Never fails: remote errors are logged and replaced by the local result.
    pub async fn diagnose(&self, input: impl Into<SymptomInput>) -> DiagnosisOutcome {
        let text = input.into().into_text();

        let Some(remote) = &self.remote else {
            return DiagnosisOutcome::local(diagnosis::local_diagnose(text));
        };

        if diagnosis::normalize::normalize(&text).is_empty() {
            return DiagnosisOutcome::local(diagnosis::local_diagnose(text));
        }

        let attempt = tokio::time::timeout(self.budget, remote.diagnose(&text)).await;
        match attempt {
            Ok(Ok(reply)) => {
                tracing::debug!(remote = remote.name(), "Remote diagnosis succeeded");
                DiagnosisOutcome::remote(reply)
            }
            Ok(Err(e)) => {
                tracing::warn!(remote = remote.name(), error = %e, "Remote diagnosis failed, using local classifier");
                DiagnosisOutcome::local(diagnosis::local_diagnose(text))
            }
            Err(_) => {
                tracing::warn!(
                    remote = remote.name(),
                    budget_ms = self.budget.as_millis() as u64,
                    "Remote diagnosis timed out, using local classifier"
                );
                DiagnosisOutcome::local(diagnosis::local_diagnose(text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml_service::MockRemoteDiagnoser;

    fn remote_reply() -> RemoteDiagnosis {
        RemoteDiagnosis {
            diagnosis: "Possible Common Cold".into(),
            recommendation: Some("Rest, stay hydrated".into()),
            severity: Some("low".into()),
            needs_doctor: false,
            confidence: 0.81,
            identified_symptoms: vec!["cough".into()],
        }
    }

    #[tokio::test]
    async fn local_only_engine_uses_classifier() {
        let engine = DiagnosisEngine::local_only();
        let outcome = engine.diagnose("sneezing and itchy eyes").await;
        assert_eq!(outcome.source, DiagnosisSource::Local);
        assert_eq!(outcome.report.diagnosis(), "Possible Allergic Rhinitis");
    }

    #[tokio::test]
    async fn remote_success_is_returned() {
        let mock = Arc::new(MockRemoteDiagnoser::answering(remote_reply()));
        let engine = DiagnosisEngine::with_remote(mock.clone(), Duration::from_secs(1));

        let outcome = engine.diagnose("cough").await;
        assert_eq!(outcome.source, DiagnosisSource::Remote);
        assert_eq!(outcome.report.diagnosis(), "Possible Common Cold");
        assert_eq!(outcome.report.confidence(), 0.81);
        assert!(!outcome.report.needs_doctor());
        assert_eq!(mock.calls(), vec!["cough"]);
    }

    #[tokio::test]
    async fn remote_failure_falls_back() {
        let mock = Arc::new(MockRemoteDiagnoser::failing("ML service is offline"));
        let engine = DiagnosisEngine::with_remote(mock.clone(), Duration::from_secs(1));

        let outcome = engine.diagnose("I have a fever and a cough").await;
        assert_eq!(outcome.source, DiagnosisSource::Local);
        assert_eq!(outcome.report.diagnosis(), "Possible Influenza (Flu)");
        assert!(outcome.report.needs_doctor());
        assert_eq!(mock.calls().len(), 1);
    }

    #[tokio::test]
    async fn slow_remote_is_abandoned_within_budget() {
        let mock = Arc::new(
            MockRemoteDiagnoser::answering(remote_reply()).with_delay(Duration::from_secs(5)),
        );
        let engine = DiagnosisEngine::with_remote(mock, Duration::from_millis(50));

        let started = std::time::Instant::now();
        let outcome = engine.diagnose(vec!["painful urination", "frequent urination"]).await;
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(outcome.source, DiagnosisSource::Local);
        assert_eq!(outcome.report.diagnosis(), "Possible Urinary Tract Infection");
    }

    #[tokio::test]
    async fn empty_input_skips_remote() {
        let mock = Arc::new(MockRemoteDiagnoser::answering(remote_reply()));
        let engine = DiagnosisEngine::with_remote(mock.clone(), Duration::from_secs(1));

        let outcome = engine.diagnose("?!").await;
        assert_eq!(outcome.source, DiagnosisSource::Local);
        assert_eq!(outcome.report.confidence(), 0.0);
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn outcome_serializes_flat_with_source() {
        let outcome = DiagnosisOutcome::local(diagnosis::local_diagnose("sneezing and itchy eyes"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["source"], "local");
        assert_eq!(json["diagnosis"], "Possible Allergic Rhinitis");
        assert_eq!(json["severity"], "low");
        assert_eq!(json["needs_doctor"], false);

        let outcome = DiagnosisOutcome::remote(remote_reply());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["source"], "remote");
        assert_eq!(json["confidence"], 0.81);
    }
}
