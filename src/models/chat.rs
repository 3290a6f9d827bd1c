use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::MessageSender;

/// One entry in a patient's chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: MessageSender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: MessageSender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One patient's conversation as shown in the doctor's inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub patient_id: String,
    pub last_message: String,
    pub last_at: Option<DateTime<Utc>>,
    pub message_count: usize,
}

impl ConversationSummary {
    /// Summarize a history, oldest message first.
    pub fn from_history(patient_id: &str, history: &[ChatMessage]) -> Self {
        let last = history.last();
        Self {
            patient_id: patient_id.to_string(),
            last_message: last.map(|m| m.text.clone()).unwrap_or_default(),
            last_at: last.map(|m| m.timestamp),
            message_count: history.len(),
        }
    }
}
