//! Canned-heuristic chat assistant.
//!
//! Symptom talk goes to the diagnosis engine; greetings and appointment
//! questions get fixed replies. The engine never fails, so neither does
//! `reply`.

use crate::engine::{DiagnosisEngine, DiagnosisOutcome};

const SYMPTOM_KEYWORDS: &[&str] = &[
    "fever",
    "cough",
    "headache",
    "nausea",
    "vomit",
    "diarrhea",
    "pain",
    "sore throat",
    "temperature",
    "urination",
];

const GREETINGS: &[&str] = &["hi", "hello", "hey", "good morning", "good afternoon", "good evening"];

pub const DISCLAIMER: &str =
    "Note: This information is informational and not a substitute for professional medical advice.";

pub const GREETING_REPLY: &str = "Hello! I am MediDiag Assistant. How can I help you today? \
You can describe symptoms or ask about appointments and profiles.";

pub const APPOINTMENT_REPLY: &str = "To book an appointment, go to \"Find Doctors\" and choose a time. \
If you want, tell me which specialty or preferred date and I can help.";

pub const DEFAULT_REPLY: &str =
    "Thanks for your message, could you provide a bit more detail so I can assist you?";

/// What kind of message the patient sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Symptoms,
    Greeting,
    Appointment,
    Other,
}

/// Classify a message. Symptom keywords win over greetings, so
/// "hi, I have a fever" is treated as symptoms.
pub fn classify_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    if SYMPTOM_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Intent::Symptoms
    } else if GREETINGS.iter().any(|g| lowered.starts_with(g)) {
        Intent::Greeting
    } else if lowered.contains("appointment") {
        Intent::Appointment
    } else {
        Intent::Other
    }
}

/// Render a diagnosis as a single chat line.
pub fn format_diagnosis(outcome: &DiagnosisOutcome) -> String {
    let report = &outcome.report;
    let mut parts = Vec::with_capacity(4);

    if !report.diagnosis().is_empty() {
        parts.push(format!("{}.", report.diagnosis()));
    }
    if let Some(rec) = report.recommendation().filter(|r| !r.is_empty()) {
        parts.push(format!("Recommendation: {rec}."));
    }
    parts.push(format!("Confidence: {}", report.confidence()));
    parts.push(DISCLAIMER.to_string());

    parts.join(" ")
}

/// Produces AI replies for patient chat messages.
#[derive(Clone)]
pub struct ChatAssistant {
    engine: DiagnosisEngine,
}

impl ChatAssistant {
    pub fn new(engine: DiagnosisEngine) -> Self {
        Self { engine }
    }

    pub async fn reply(&self, text: &str) -> String {
        let intent = classify_intent(text);
        tracing::debug!(?intent, "Generating assistant reply");

        match intent {
            Intent::Symptoms => {
                let outcome = self.engine.diagnose(text).await;
                format_diagnosis(&outcome)
            }
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::Appointment => APPOINTMENT_REPLY.to_string(),
            Intent::Other => DEFAULT_REPLY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::ml_service::{MockRemoteDiagnoser, RemoteDiagnosis};

    fn local_assistant() -> ChatAssistant {
        ChatAssistant::new(DiagnosisEngine::local_only())
    }

    #[test]
    fn intent_classification() {
        assert_eq!(classify_intent("I have a FEVER"), Intent::Symptoms);
        assert_eq!(classify_intent("my stomach pain is bad"), Intent::Symptoms);
        assert_eq!(classify_intent("Hello there"), Intent::Greeting);
        assert_eq!(classify_intent("good evening doctor"), Intent::Greeting);
        assert_eq!(classify_intent("Can I move my appointment?"), Intent::Appointment);
        assert_eq!(classify_intent("what are your opening hours"), Intent::Other);
    }

    #[test]
    fn symptoms_take_priority_over_greeting() {
        assert_eq!(classify_intent("hi, I have a headache"), Intent::Symptoms);
    }

    #[test]
    fn greeting_must_lead_the_message() {
        assert_eq!(classify_intent("well hello"), Intent::Other);
    }

    #[tokio::test]
    async fn symptom_reply_uses_local_diagnosis() {
        let reply = local_assistant().reply("I have a fever and a cough").await;
        assert!(reply.starts_with("Possible Influenza (Flu). Recommendation: "), "{reply}");
        assert!(reply.contains("Confidence: 0.38"), "{reply}");
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[tokio::test]
    async fn symptom_reply_prefers_remote() {
        let remote = Arc::new(MockRemoteDiagnoser::answering(RemoteDiagnosis {
            diagnosis: "Possible Common Cold".into(),
            recommendation: None,
            severity: None,
            needs_doctor: false,
            confidence: 0.7,
            identified_symptoms: vec![],
        }));
        let assistant = ChatAssistant::new(DiagnosisEngine::with_remote(remote, Duration::from_secs(1)));

        let reply = assistant.reply("bad cough").await;
        assert_eq!(reply, format!("Possible Common Cold. Confidence: 0.7 {DISCLAIMER}"));
    }

    #[tokio::test]
    async fn symptom_reply_survives_remote_failure() {
        let remote = Arc::new(MockRemoteDiagnoser::failing("down"));
        let assistant = ChatAssistant::new(DiagnosisEngine::with_remote(remote, Duration::from_secs(1)));

        let reply = assistant.reply("painful urination").await;
        assert!(reply.starts_with("Possible Urinary Tract Infection."), "{reply}");
    }

    #[tokio::test]
    async fn canned_replies() {
        let assistant = local_assistant();
        assert_eq!(assistant.reply("hey").await, GREETING_REPLY);
        assert_eq!(assistant.reply("I need an appointment").await, APPOINTMENT_REPLY);
        assert_eq!(assistant.reply("thanks").await, DEFAULT_REPLY);
    }

    #[test]
    fn formatting_skips_missing_recommendation() {
        let outcome = DiagnosisOutcome::remote(RemoteDiagnosis {
            diagnosis: "Possible Migraine".into(),
            recommendation: Some(String::new()),
            severity: None,
            needs_doctor: true,
            confidence: 0.0,
            identified_symptoms: vec![],
        });
        assert_eq!(format_diagnosis(&outcome), format!("Possible Migraine. Confidence: 0 {DISCLAIMER}"));
    }
}
