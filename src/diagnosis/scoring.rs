use std::collections::BTreeSet;

use super::normalize::NormalizedText;
use super::rules::ConditionRule;
use crate::models::SymptomTag;

/// A rule with at least one matched tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub rule: &'static ConditionRule,
    pub matched_count: usize,
    /// `matched_count / max(1, required_tags.len())`
    pub match_fraction: f64,
}

/// Count how many of the rule's tags are present, either resolved or
/// mentioned by name in the text.
fn matched_tags(rule: &ConditionRule, tags: &BTreeSet<SymptomTag>, text: &NormalizedText) -> usize {
    rule.required_tags
        .iter()
        .filter(|tag| tags.contains(*tag) || text.mentions(&tag.phrase()))
        .count()
}

/// Score every rule, drop those with zero matches, and rank the rest:
/// match fraction descending, then matched count descending. Exact ties
/// keep table order.
pub fn score_rules(
    tags: &BTreeSet<SymptomTag>,
    text: &NormalizedText,
    rules: &'static [ConditionRule],
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = rules
        .iter()
        .filter_map(|rule| {
            let matched_count = matched_tags(rule, tags, text);
            if matched_count == 0 {
                return None;
            }
            Some(ScoredCandidate {
                rule,
                matched_count,
                match_fraction: matched_count as f64 / rule.required_tags.len().max(1) as f64,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.match_fraction
            .total_cmp(&a.match_fraction)
            .then(b.matched_count.cmp(&a.matched_count))
    });

    candidates
}
