//! Patient chat: message storage and the assistant that answers it.
//!
//! - `store` keeps per-patient history behind the `ChatStore` seam
//! - `assistant` produces the AI reply for a patient message
//!
//! Validation mirrors what the HTTP layer accepts: non-empty after
//! trimming, at most `MAX_MESSAGE_CHARS` characters.

pub mod assistant;
pub mod store;

pub use assistant::ChatAssistant;
pub use store::{ChatStore, InMemoryChatStore};

use thiserror::Error;

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatError {
    #[error("Chat store lock poisoned")]
    LockPoisoned,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long (max {max} chars, got {actual})")]
    MessageTooLong { max: usize, actual: usize },
}

/// Trim and validate an incoming message, returning the text to store.
pub fn validate_message(text: &str) -> Result<&str, ChatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_MESSAGE_CHARS {
        return Err(ChatError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
            actual,
        });
    }
    Ok(trimmed)
}
