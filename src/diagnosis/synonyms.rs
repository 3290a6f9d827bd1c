use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::normalize::{normalize, NormalizedText};
use crate::models::SymptomTag;

/// Surface phrases that indicate each canonical tag.
///
/// The tag's own name (underscores as spaces) is always an implicit
/// synonym and does not need to be listed here.
pub static SYNONYMS: &[(SymptomTag, &[&str])] = &[
    (SymptomTag::Fever, &["fever", "temperature", "high temperature", "febrile"]),
    (SymptomTag::Cough, &["cough", "coughing"]),
    (SymptomTag::SoreThroat, &["sore throat", "throat pain", "throat soreness"]),
    (SymptomTag::RunnyNose, &["runny nose", "runny-nose"]),
    (SymptomTag::Sneezing, &["sneeze", "sneezing"]),
    (SymptomTag::Congestion, &["congestion", "stuffy", "blocked nose", "nasal congestion"]),
    (SymptomTag::Headache, &["headache", "head pain", "migraine"]),
    (SymptomTag::Nausea, &["nausea", "nauseous", "queasy"]),
    (SymptomTag::Vomiting, &["vomit", "vomiting", "throwing up"]),
    (SymptomTag::Diarrhea, &["diarrhea", "loose stool", "runny stools"]),
    (SymptomTag::PainfulUrination, &["painful urination", "burning urine", "dysuria"]),
    (SymptomTag::Fatigue, &["fatigue", "tired", "tiredness", "exhausted", "exhaustion"]),
    (SymptomTag::BodyAches, &["body aches", "body ache", "body pain", "muscle pain", "muscle aches"]),
    (SymptomTag::ItchyEyes, &["itchy eyes", "itching eyes", "watery eyes"]),
    (SymptomTag::SensitivityToLight, &["light sensitivity", "sensitive to light", "photophobia"]),
    (SymptomTag::SensitivityToSound, &["sound sensitivity", "sensitive to sound", "noise sensitivity", "phonophobia"]),
    (SymptomTag::StomachCramps, &["stomach cramps", "abdominal cramps", "cramping"]),
    (SymptomTag::FrequentUrination, &["frequent urination", "urinating often", "urinating frequently"]),
    (SymptomTag::LowerAbdominalPain, &["lower abdominal pain", "lower stomach pain", "lower belly pain", "pelvic pain"]),
];

/// A normalized phrase and the tag it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    pub phrase: String,
    pub tag: SymptomTag,
}

/// Every phrase from [`SYNONYMS`] plus each tag's implicit name, normalized
/// once, longest phrases first.
static PHRASE_INDEX: LazyLock<Vec<PhraseEntry>> = LazyLock::new(build_index);

fn build_index() -> Vec<PhraseEntry> {
    let mut index: Vec<PhraseEntry> = SymptomTag::ALL
        .iter()
        .map(|tag| PhraseEntry {
            phrase: tag.phrase(),
            tag: *tag,
        })
        .collect();

    for (tag, phrases) in SYNONYMS {
        for phrase in *phrases {
            let normalized = normalize(phrase);
            if normalized.is_empty() {
                continue;
            }
            let entry = PhraseEntry {
                phrase: normalized.as_str().to_string(),
                tag: *tag,
            };
            if !index.contains(&entry) {
                index.push(entry);
            }
        }
    }

    index.sort_by(|a, b| b.phrase.len().cmp(&a.phrase.len()));
    index
}

/// The shared phrase index.
pub fn phrase_index() -> &'static [PhraseEntry] {
    &PHRASE_INDEX
}

/// Map normalized text onto the set of canonical tags it mentions.
pub fn resolve_tags(text: &NormalizedText) -> BTreeSet<SymptomTag> {
    if text.is_empty() {
        return BTreeSet::new();
    }

    phrase_index()
        .iter()
        .filter(|entry| text.mentions(&entry.phrase))
        .map(|entry| entry.tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &str) -> BTreeSet<SymptomTag> {
        resolve_tags(&normalize(raw))
    }

    #[test]
    fn every_tag_has_an_implicit_phrase() {
        for tag in SymptomTag::ALL {
            assert!(
                phrase_index().iter().any(|e| e.tag == *tag && e.phrase == tag.phrase()),
                "missing implicit phrase for {tag}"
            );
        }
    }

    #[test]
    fn index_is_longest_first_and_normalized() {
        let index = phrase_index();
        assert!(index.windows(2).all(|w| w[0].phrase.len() >= w[1].phrase.len()));
        assert!(index.iter().all(|e| normalize(&e.phrase).as_str() == e.phrase));
    }

    #[test]
    fn resolves_single_words() {
        assert_eq!(tags("I have a fever and a cough"), BTreeSet::from([SymptomTag::Fever, SymptomTag::Cough]));
    }

    #[test]
    fn resolves_multi_word_phrases() {
        assert_eq!(tags("my throat pain is bad"), BTreeSet::from([SymptomTag::SoreThroat]));
        assert_eq!(tags("sneezing and itchy eyes"), BTreeSet::from([SymptomTag::Sneezing, SymptomTag::ItchyEyes]));
    }

    #[test]
    fn aliases_collapse_to_one_tag() {
        assert_eq!(tags("high temperature, febrile, fever"), BTreeSet::from([SymptomTag::Fever]));
    }

    #[test]
    fn hyphenated_alias_matches() {
        assert!(tags("a runny-nose all week").contains(&SymptomTag::RunnyNose));
    }

    #[test]
    fn runny_stools_is_not_a_runny_nose() {
        assert_eq!(tags("runny stools"), BTreeSet::from([SymptomTag::Diarrhea]));
        assert_eq!(
            crate::diagnosis::local_diagnose("runny stools").diagnosis_text,
            "Possible Gastroenteritis"
        );
    }

    #[test]
    fn rule_only_tags_match_by_name() {
        let found = tags("frequent urination and lower abdominal pain");
        assert!(found.contains(&SymptomTag::FrequentUrination));
        assert!(found.contains(&SymptomTag::LowerAbdominalPain));
    }

    #[test]
    fn case_and_punctuation_do_not_matter() {
        assert_eq!(tags("FEVER and Cough!!"), tags("fever and cough"));
    }

    #[test]
    fn unknown_words_resolve_to_nothing() {
        assert!(tags("xyz qwerty").is_empty());
        assert!(tags("").is_empty());
    }
}
