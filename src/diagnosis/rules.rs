use crate::models::{Severity, SymptomTag};

/// A known condition and the symptom tags expected to co-occur with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRule {
    pub key: &'static str,
    pub display_name: &'static str,
    pub required_tags: &'static [SymptomTag],
    pub severity: Severity,
    pub needs_doctor: bool,
    pub recommendation: &'static str,
}

/// Static condition table. Order matters only for exact ranking ties.
pub static CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        key: "common_cold",
        display_name: "Common Cold",
        required_tags: &[
            SymptomTag::Cough,
            SymptomTag::Sneezing,
            SymptomTag::RunnyNose,
            SymptomTag::SoreThroat,
            SymptomTag::Congestion,
        ],
        severity: Severity::Low,
        needs_doctor: false,
        recommendation: "Rest, hydration, over-the-counter cold medication",
    },
    ConditionRule {
        key: "flu",
        display_name: "Influenza (Flu)",
        required_tags: &[
            SymptomTag::Fever,
            SymptomTag::Cough,
            SymptomTag::SoreThroat,
            SymptomTag::BodyAches,
            SymptomTag::Headache,
            SymptomTag::Fatigue,
        ],
        severity: Severity::Medium,
        needs_doctor: true,
        recommendation: "Rest, fluids, antiviral medication if early",
    },
    ConditionRule {
        key: "migraine",
        display_name: "Migraine",
        required_tags: &[
            SymptomTag::Headache,
            SymptomTag::Nausea,
            SymptomTag::SensitivityToLight,
            SymptomTag::SensitivityToSound,
        ],
        severity: Severity::Medium,
        needs_doctor: true,
        recommendation: "Rest in dark room, pain relievers",
    },
    ConditionRule {
        key: "gastroenteritis",
        display_name: "Gastroenteritis",
        required_tags: &[
            SymptomTag::Nausea,
            SymptomTag::Vomiting,
            SymptomTag::Diarrhea,
            SymptomTag::StomachCramps,
            SymptomTag::Fever,
        ],
        severity: Severity::Medium,
        needs_doctor: false,
        recommendation: "Hydration, bland diet, rest",
    },
    ConditionRule {
        key: "allergies",
        display_name: "Allergic Rhinitis",
        required_tags: &[
            SymptomTag::Sneezing,
            SymptomTag::RunnyNose,
            SymptomTag::ItchyEyes,
            SymptomTag::Congestion,
        ],
        severity: Severity::Low,
        needs_doctor: false,
        recommendation: "Antihistamines, nasal sprays",
    },
    ConditionRule {
        key: "uti",
        display_name: "Urinary Tract Infection",
        required_tags: &[
            SymptomTag::PainfulUrination,
            SymptomTag::FrequentUrination,
            SymptomTag::LowerAbdominalPain,
        ],
        severity: Severity::High,
        needs_doctor: true,
        recommendation: "Antibiotics (prescription required)",
    },
];

/// Look up a rule by its key.
pub fn find_rule(key: &str) -> Option<&'static ConditionRule> {
    CONDITION_RULES.iter().find(|r| r.key == key)
}
