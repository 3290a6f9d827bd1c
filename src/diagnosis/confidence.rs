use std::collections::BTreeSet;

use super::scoring::ScoredCandidate;
use crate::models::{DiagnosisResult, Severity, SymptomTag};

/// Confidence bounds applied whenever a rule matched.
pub mod bounds {
    pub const FLOOR: f64 = 0.05;
    pub const CEILING: f64 = 0.99;

    /// Weight of the match fraction; the evidence factor gets the rest.
    pub const FRACTION_WEIGHT: f64 = 0.8;
    pub const EVIDENCE_WEIGHT: f64 = 0.2;
}

pub const UNIDENTIFIED_DIAGNOSIS: &str =
    "Unable to identify specific symptoms. Please provide more detail.";
pub const UNIDENTIFIED_RECOMMENDATION: &str = "Consult a healthcare professional.";

/// Saturating reward for absolute matched count:
/// `min(1, ln(1 + matched) / ln(1 + required))`.
pub fn evidence_factor(matched: usize, required: usize) -> f64 {
    let denominator = ((1 + required.max(1)) as f64).ln();
    (((1 + matched) as f64).ln() / denominator).min(1.0)
}

/// Blend match fraction and evidence, clamp, round to two decimals.
pub fn candidate_confidence(candidate: &ScoredCandidate) -> f64 {
    let base = candidate.match_fraction.min(1.0);
    let evidence = evidence_factor(candidate.matched_count, candidate.rule.required_tags.len());
    let blended = base * bounds::FRACTION_WEIGHT + evidence * bounds::EVIDENCE_WEIGHT;
    round2(blended.clamp(bounds::FLOOR, bounds::CEILING))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the final result from the top-ranked candidate, if any.
pub fn assemble(
    top: Option<&ScoredCandidate>,
    identified: BTreeSet<SymptomTag>,
    raw_input: String,
) -> DiagnosisResult {
    match top {
        None => DiagnosisResult {
            diagnosis_text: UNIDENTIFIED_DIAGNOSIS.to_string(),
            recommendation_text: UNIDENTIFIED_RECOMMENDATION.to_string(),
            severity: Severity::Unknown,
            needs_doctor: true,
            confidence: 0.0,
            identified_symptoms: identified,
            matched_keyword_count: 0,
            raw_input,
        },
        Some(candidate) => DiagnosisResult {
            diagnosis_text: format!("Possible {}", candidate.rule.display_name),
            recommendation_text: candidate.rule.recommendation.to_string(),
            severity: candidate.rule.severity,
            needs_doctor: candidate.rule.needs_doctor,
            confidence: candidate_confidence(candidate),
            identified_symptoms: identified,
            matched_keyword_count: candidate.matched_count,
            raw_input,
        },
    }
}
