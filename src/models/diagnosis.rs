use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::enums::{Severity, SymptomTag};

/// Output of the local symptom classifier. Built once per call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    #[serde(rename = "diagnosis")]
    pub diagnosis_text: String,
    #[serde(rename = "recommendation")]
    pub recommendation_text: String,
    pub severity: Severity,
    pub needs_doctor: bool,
    /// 0.0 when nothing matched, otherwise within [0.05, 0.99], two decimals.
    pub confidence: f64,
    pub identified_symptoms: BTreeSet<SymptomTag>,
    pub matched_keyword_count: usize,
    pub raw_input: String,
}

impl DiagnosisResult {
    /// True for the "unable to identify" outcome.
    pub fn is_unidentified(&self) -> bool {
        self.severity == Severity::Unknown && self.confidence == 0.0
    }
}
