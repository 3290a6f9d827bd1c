use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("Invalid normalizer regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid normalizer regex"));

/// Lower-cased, punctuation-free text plus its token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    tokens: Vec<String>,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Exact token equality or substring containment.
    ///
    /// Substring containment is what lets multi-word phrases match.
    pub fn mentions(&self, phrase: &str) -> bool {
        if phrase.is_empty() {
            return false;
        }
        self.has_token(phrase) || self.text.contains(phrase)
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.iter().any(|t| t == word)
    }
}

/// Normalize free text: lower-case, replace anything outside
/// `[a-z0-9\s]` with a space, collapse whitespace, trim.
pub fn normalize(raw: &str) -> NormalizedText {
    let lower = raw.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lower, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let text = collapsed.trim().to_string();

    let tokens = text
        .split_whitespace()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    NormalizedText { text, tokens }
}
