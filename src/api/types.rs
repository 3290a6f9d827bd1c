//! Shared state for the HTTP layer.

use std::sync::Arc;

use crate::chat::{ChatAssistant, ChatStore, InMemoryChatStore};
use crate::engine::DiagnosisEngine;

/// Shared context for all API routes. Cheap to clone.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: DiagnosisEngine,
    pub chat_store: Arc<dyn ChatStore>,
    pub assistant: ChatAssistant,
}

impl ApiContext {
    pub fn new(engine: DiagnosisEngine, chat_store: Arc<dyn ChatStore>) -> Self {
        Self {
            assistant: ChatAssistant::new(engine.clone()),
            engine,
            chat_store,
        }
    }

    /// Local-only engine with an unbounded in-memory chat store.
    pub fn local() -> Self {
        Self::new(DiagnosisEngine::local_only(), Arc::new(InMemoryChatStore::new()))
    }
}
