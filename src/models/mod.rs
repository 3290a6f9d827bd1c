pub mod chat;
pub mod diagnosis;
pub mod enums;

pub use chat::{ChatMessage, ConversationSummary};
pub use diagnosis::DiagnosisResult;
pub use enums::{MessageSender, ParseEnumError, Severity, SymptomTag};
