//! Per-patient chat history.

use std::collections::HashMap;
use std::sync::RwLock;

use super::ChatError;
use crate::models::{ChatMessage, ConversationSummary};

/// Storage seam for chat history, keyed by patient id.
pub trait ChatStore: Send + Sync {
    /// Messages for a patient, oldest first. Unknown patients have none.
    fn messages(&self, patient_id: &str) -> Result<Vec<ChatMessage>, ChatError>;

    fn append(&self, patient_id: &str, message: ChatMessage) -> Result<(), ChatError>;

    /// One summary per patient with history, most recent activity first.
    fn conversations(&self) -> Result<Vec<ConversationSummary>, ChatError>;
}

/// Process-local store. History is lost on restart.
pub struct InMemoryChatStore {
    chats: RwLock<HashMap<String, Vec<ChatMessage>>>,
    /// Per-patient cap; the oldest messages are dropped beyond it.
    history_limit: Option<usize>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self {
            chats: RwLock::new(HashMap::new()),
            history_limit: None,
        }
    }

    /// Keep at most `limit` messages per patient. Zero means unbounded.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            chats: RwLock::new(HashMap::new()),
            history_limit: (limit > 0).then_some(limit),
        }
    }
}

impl Default for InMemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore for InMemoryChatStore {
    fn messages(&self, patient_id: &str) -> Result<Vec<ChatMessage>, ChatError> {
        let chats = self.chats.read().map_err(|_| ChatError::LockPoisoned)?;
        Ok(chats.get(patient_id).cloned().unwrap_or_default())
    }

    fn append(&self, patient_id: &str, message: ChatMessage) -> Result<(), ChatError> {
        let mut chats = self.chats.write().map_err(|_| ChatError::LockPoisoned)?;
        let history = chats.entry(patient_id.to_string()).or_default();
        history.push(message);

        if let Some(limit) = self.history_limit {
            if history.len() > limit {
                let excess = history.len() - limit;
                history.drain(..excess);
            }
        }
        Ok(())
    }

    fn conversations(&self) -> Result<Vec<ConversationSummary>, ChatError> {
        let chats = self.chats.read().map_err(|_| ChatError::LockPoisoned)?;
        let mut summaries: Vec<ConversationSummary> = chats
            .iter()
            .map(|(patient_id, history)| ConversationSummary::from_history(patient_id, history))
            .collect();
        drop(chats);

        // Newest activity first; patient id keeps the order stable
        summaries.sort_by(|a, b| {
            b.last_at
                .cmp(&a.last_at)
                .then_with(|| a.patient_id.cmp(&b.patient_id))
        });
        Ok(summaries)
    }
}
