//! Dictionary-and-suffix part-of-speech classifier.
//!
//! Independent of whatever tagger the linguistic primitives provide: a word is
//! looked up in the static tables first, then matched against suffix rules in
//! a fixed order (`-ly` adverbs, then adjective, noun and verb suffixes, then
//! the per-category catch-all endings).

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::hyperparams::Hyperparameters;
use crate::lexicon::{ADJECTIVES, ADVERBS, FUNCTION, NOUNS, VERBS};
use crate::rules::{Predicate, RuleMatch, RuleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    FunctionWord,
    Other,
}

// ---------------------------------------------------------------------------
// Suffix tables
// ---------------------------------------------------------------------------

const ADVERB_SUFFIX: &[&str] = &["ly"];
const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ive", "able", "ible", "ous", "ious"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ness", "ment", "ship", "hood", "ity"];
const PAST_SUFFIX: &[&str] = &["ed"];
const GERUND_SUFFIX: &[&str] = &["ing"];

const ADJECTIVE_ENDINGS: &[&str] = &[
    "ful", "less", "ive", "able", "ible", "ous", "ious", "eous", "al", "ic", "ical", "ant", "ent",
    "ing", "ed", "ly", "y", "ish", "like", "ward", "wise",
];
const NOUN_ENDINGS: &[&str] = &[
    "tion", "sion", "ness", "ment", "ship", "hood", "ity", "acy", "ism", "er", "or", "ar", "ist",
    "ant", "ent", "ure", "age", "ence", "ance", "ette", "dom", "ty", "cy",
];
const VERB_ENDINGS: &[&str] = &["ed", "ing", "s", "es", "en", "ize", "ise", "fy", "ate"];
const ADVERB_ENDINGS: &[&str] = &["ly", "ward", "wise", "wards"];

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PosClassifier {
    rules: RuleSet<PosTag>,
    suffix_rules: RuleSet<PosTag>,
    min_word_len: usize,
}

impl PosClassifier {
    pub fn new(hp: &Hyperparameters) -> Self {
        let suffix = |suffixes, min_len| Predicate::Suffix { suffixes, min_len };
        let rules = RuleSet::new(PosTag::Other)
            .rule("common noun", Predicate::InSet(&NOUNS), PosTag::Noun)
            .rule("common verb", Predicate::InSet(&VERBS), PosTag::Verb)
            .rule("common adjective", Predicate::InSet(&ADJECTIVES), PosTag::Adjective)
            .rule("common adverb", Predicate::InSet(&ADVERBS), PosTag::Adverb)
            .rule("function word", Predicate::InSet(&FUNCTION), PosTag::FunctionWord)
            .rule("inflected noun", Predicate::StemInSet(&NOUNS), PosTag::Noun)
            .rule("inflected verb", Predicate::StemInSet(&VERBS), PosTag::Verb)
            .rule(
                "suffix -ly",
                suffix(ADVERB_SUFFIX, hp.adverb_ly_min_len),
                PosTag::Adverb,
            )
            .rule(
                "adjective suffix",
                suffix(ADJECTIVE_SUFFIXES, 0),
                PosTag::Adjective,
            )
            .rule("noun suffix", suffix(NOUN_SUFFIXES, 0), PosTag::Noun)
            .rule("suffix -ed", suffix(PAST_SUFFIX, hp.verb_ed_min_len), PosTag::Verb)
            .rule(
                "suffix -ing",
                suffix(GERUND_SUFFIX, hp.verb_ing_min_len),
                PosTag::Verb,
            )
            .rule(
                "adjective ending",
                suffix(ADJECTIVE_ENDINGS, 0),
                PosTag::Adjective,
            )
            .rule("noun ending", suffix(NOUN_ENDINGS, 0), PosTag::Noun)
            .rule("verb ending", suffix(VERB_ENDINGS, 0), PosTag::Verb)
            .rule("adverb ending", suffix(ADVERB_ENDINGS, 0), PosTag::Adverb);
        let suffix_rules = rules.shape_only();
        Self {
            rules,
            suffix_rules,
            min_word_len: hp.min_word_len,
        }
    }

    /// Classify one word. `None` means the word is too short to count at all.
    pub fn classify(&self, word: &str) -> Option<PosTag> {
        self.classify_with_rule(word).map(|m| m.category)
    }

    /// Like [`classify`](Self::classify), also naming the rule that fired.
    pub fn classify_with_rule(&self, word: &str) -> Option<RuleMatch<PosTag>> {
        let word = normalize(word);
        if word.chars().count() < self.min_word_len {
            return None;
        }
        Some(self.rules.apply(&word))
    }

    /// Suffix rules only, for when no dictionary-quality pass is wanted.
    pub fn classify_suffix_only(&self, word: &str) -> Option<PosTag> {
        let word = normalize(word);
        if word.chars().count() < self.min_word_len {
            return None;
        }
        Some(self.suffix_rules.apply(&word).category)
    }

    pub fn classify_all<'a, I>(&self, words: I) -> Vec<(String, PosTag)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .filter_map(|w| self.classify(w).map(|tag| (normalize(w), tag)))
            .collect()
    }
}

impl Default for PosClassifier {
    fn default() -> Self {
        Self::new(&Hyperparameters::DEFAULT)
    }
}

/// Lower-case and trim surrounding punctuation.
pub(crate) fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

static DEFAULT_CLASSIFIER: Lazy<PosClassifier> = Lazy::new(PosClassifier::default);

/// Classify with the default rule set.
pub fn classify(word: &str) -> Option<PosTag> {
    DEFAULT_CLASSIFIER.classify(word)
}

pub fn classify_with_rule(word: &str) -> Option<RuleMatch<PosTag>> {
    DEFAULT_CLASSIFIER.classify_with_rule(word)
}

pub fn classify_all<'a, I>(words: I) -> Vec<(String, PosTag)>
where
    I: IntoIterator<Item = &'a str>,
{
    DEFAULT_CLASSIFIER.classify_all(words)
}
