//! Rule-based symptom classifier.
//!
//! Pipeline: normalize → resolve synonyms → score condition rules →
//! estimate confidence. Pure and synchronous; the tables are immutable
//! statics shared by every caller.

pub mod confidence;
pub mod input;
pub mod normalize;
pub mod rules;
pub mod scoring;
pub mod synonyms;

pub use input::SymptomInput;
pub use rules::{ConditionRule, CONDITION_RULES};
pub use scoring::ScoredCandidate;

use crate::models::DiagnosisResult;

/// Classify a free-text symptom description.
///
/// Total over its input: empty, absent, text and line-list inputs all
/// produce a result. "Nothing recognized" is reported as confidence 0.0
/// with unknown severity, not as an error.
pub fn local_diagnose(input: impl Into<SymptomInput>) -> DiagnosisResult {
    let raw_input = input.into().into_text();
    let text = normalize::normalize(&raw_input);
    let identified = synonyms::resolve_tags(&text);
    let candidates = scoring::score_rules(&identified, &text, CONDITION_RULES);

    tracing::debug!(
        tags = identified.len(),
        candidates = candidates.len(),
        top = candidates.first().map(|c| c.rule.key),
        "Local diagnosis scored"
    );

    confidence::assemble(candidates.first(), identified, raw_input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::models::{Severity, SymptomTag};

    const SAMPLE_INPUTS: &[&str] = &[
        "",
        "xyz qwerty",
        "I have a fever and a cough",
        "FEVER and Cough!!",
        "sneezing and itchy eyes",
        "painful urination",
        "headache, nausea, light sensitivity and noise sensitivity",
        "throwing up, loose stool, stomach cramps, febrile",
        "runny-nose, stuffy, sneeze, sore throat, coughing",
        "tired, body aches, head pain, high temperature, throat pain, cough",
        "!!!???",
    ];

    // ── Scenarios ──────────────────────────────────────────

    #[test]
    fn fever_and_cough_suggests_flu() {
        let result = local_diagnose("I have a fever and a cough");
        assert_eq!(
            result.identified_symptoms,
            BTreeSet::from([SymptomTag::Fever, SymptomTag::Cough])
        );
        assert_eq!(result.diagnosis_text, "Possible Influenza (Flu)");
        assert!(result.needs_doctor);
        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.confidence, 0.38);
        assert_eq!(result.matched_keyword_count, 2);
    }

    #[test]
    fn sneezing_and_itchy_eyes_suggests_allergies() {
        let result = local_diagnose("sneezing and itchy eyes");
        assert_eq!(
            result.identified_symptoms,
            BTreeSet::from([SymptomTag::Sneezing, SymptomTag::ItchyEyes])
        );
        assert_eq!(result.diagnosis_text, "Possible Allergic Rhinitis");
        assert_eq!(result.severity, Severity::Low);
        assert!(!result.needs_doctor);
        assert_eq!(result.confidence, 0.54);
    }

    #[test]
    fn unrecognized_words_are_unidentified() {
        let result = local_diagnose("xyz qwerty");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.severity, Severity::Unknown);
        assert!(result.needs_doctor);
        assert!(result.identified_symptoms.is_empty());
        assert_eq!(result.raw_input, "xyz qwerty");
    }

    #[test]
    fn empty_input_is_unidentified() {
        let result = local_diagnose("");
        assert!(result.is_unidentified());
        assert!(result.needs_doctor);
        assert!(result.identified_symptoms.is_empty());
        assert_eq!(result.raw_input, "");
    }

    #[test]
    fn line_list_suggests_uti() {
        let result = local_diagnose(vec!["painful urination", "frequent urination"]);
        assert!(result.identified_symptoms.contains(&SymptomTag::PainfulUrination));
        assert_eq!(result.diagnosis_text, "Possible Urinary Tract Infection");
        assert_eq!(result.severity, Severity::High);
        assert!(result.needs_doctor);
        assert_eq!(result.confidence, 0.69);
        assert_eq!(result.raw_input, "painful urination frequent urination");
    }

    // ── Properties ─────────────────────────────────────────

    #[test]
    fn absent_and_empty_list_are_total() {
        for input in [SymptomInput::Absent, SymptomInput::Lines(vec![]), SymptomInput::from(None::<String>)] {
            let result = local_diagnose(input);
            assert!(result.is_unidentified());
            assert_eq!(result.raw_input, "");
        }
    }

    #[test]
    fn deterministic() {
        for input in SAMPLE_INPUTS {
            assert_eq!(local_diagnose(*input), local_diagnose(*input));
        }
    }

    #[test]
    fn confidence_bounds_hold() {
        for input in SAMPLE_INPUTS {
            let result = local_diagnose(*input);
            assert!((0.0..=0.99).contains(&result.confidence), "{input}: {}", result.confidence);
            if result.confidence == 0.0 {
                assert_eq!(result.severity, Severity::Unknown, "{input}");
                assert_eq!(result.matched_keyword_count, 0, "{input}");
            } else {
                assert!(result.confidence >= 0.05, "{input}");
                assert!(result.matched_keyword_count > 0, "{input}");
            }
        }
    }

    #[test]
    fn identified_symptoms_are_canonical() {
        for input in SAMPLE_INPUTS {
            for tag in local_diagnose(*input).identified_symptoms {
                assert!(SymptomTag::ALL.contains(&tag));
            }
        }
    }

    #[test]
    fn case_and_format_insensitive() {
        assert_eq!(
            local_diagnose("FEVER and Cough!!").identified_symptoms,
            local_diagnose("fever and cough").identified_symptoms
        );
    }

    #[test]
    fn identified_symptoms_span_beyond_the_winning_rule() {
        let result = local_diagnose("sneezing, itchy eyes, runny nose, congestion, fever");
        assert_eq!(result.diagnosis_text, "Possible Allergic Rhinitis");
        assert!(result.identified_symptoms.contains(&SymptomTag::Fever));
        assert_eq!(result.matched_keyword_count, 4);
        assert_eq!(result.confidence, 0.99);
    }

    #[test]
    fn every_rule_matches_its_own_tags() {
        for rule in CONDITION_RULES {
            let phrases: Vec<String> = rule.required_tags.iter().map(|t| t.phrase()).collect();
            let result = local_diagnose(phrases.join(", "));
            assert_eq!(
                result.diagnosis_text,
                format!("Possible {}", rule.display_name),
                "rule {} did not win on its own tags",
                rule.key
            );
            assert_eq!(result.matched_keyword_count, rule.required_tags.len());
        }
    }

    #[test]
    fn migraine_from_rule_only_synonyms() {
        let result = local_diagnose("headache, nausea, photophobia");
        assert_eq!(result.diagnosis_text, "Possible Migraine");
        assert_eq!(result.matched_keyword_count, 3);
    }

    #[test]
    fn gastroenteritis_from_aliases() {
        let result = local_diagnose("throwing up, loose stool, stomach cramps");
        assert_eq!(result.diagnosis_text, "Possible Gastroenteritis");
        assert!(!result.needs_doctor);
    }
}
