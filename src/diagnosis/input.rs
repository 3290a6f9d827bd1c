use serde::{Deserialize, Serialize};

/// Free-form symptom description as submitted by a caller.
///
/// Deserializes from JSON `null`, a string, or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymptomInput {
    #[default]
    Absent,
    Text(String),
    Lines(Vec<String>),
}

impl SymptomInput {
    /// Flatten to a single string. Lines are joined with single spaces.
    pub fn into_text(self) -> String {
        match self {
            SymptomInput::Absent => String::new(),
            SymptomInput::Text(text) => text,
            SymptomInput::Lines(lines) => lines.join(" "),
        }
    }

    /// True when there is nothing but whitespace to classify.
    pub fn is_blank(&self) -> bool {
        match self {
            SymptomInput::Absent => true,
            SymptomInput::Text(text) => text.trim().is_empty(),
            SymptomInput::Lines(lines) => lines.iter().all(|l| l.trim().is_empty()),
        }
    }
}

impl From<&str> for SymptomInput {
    fn from(text: &str) -> Self {
        SymptomInput::Text(text.to_string())
    }
}

impl From<String> for SymptomInput {
    fn from(text: String) -> Self {
        SymptomInput::Text(text)
    }
}

impl From<Vec<String>> for SymptomInput {
    fn from(lines: Vec<String>) -> Self {
        SymptomInput::Lines(lines)
    }
}

impl From<Vec<&str>> for SymptomInput {
    fn from(lines: Vec<&str>) -> Self {
        SymptomInput::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<SymptomInput>> From<Option<T>> for SymptomInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
