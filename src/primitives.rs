//! Linguistic primitives: sentence splitting, word tokenization and
//! morphological tagging.
//!
//! The pipeline only talks to the [`LinguisticPrimitives`] trait. A backend
//! advertises what it can do through [`Capabilities`]; the pipeline picks its
//! mode from that once, at construction, and still contains any per-call
//! failure. [`HeuristicPrimitives`] is the built-in backend.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::PrimitiveError;
use crate::hyperparams::Hyperparameters;
use crate::lexicon::{
    AUXILIARY_PAST, AUXILIARY_PRESENT, CONJUNCTIONS, DETERMINERS, IRREGULAR_PARTICIPLES,
    IRREGULAR_PAST, MODALS, PREPOSITIONS, PRONOUNS, VERBS,
};
use crate::pos::{PosClassifier, PosTag};

// ---------------------------------------------------------------------------
// Interface
// ---------------------------------------------------------------------------

/// What a primitives backend is able to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub segmentation: bool,
    pub tokenization: bool,
    pub tagging: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        segmentation: true,
        tokenization: true,
        tagging: true,
    };

    pub const NONE: Capabilities = Capabilities {
        segmentation: false,
        tokenization: false,
        tagging: false,
    };
}

/// Morphological tag produced by [`LinguisticPrimitives::tag_pos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphTag {
    Noun,
    ProperNoun,
    Pronoun,
    VerbBase,
    VerbPresent,
    VerbPast,
    VerbGerund,
    VerbParticiple,
    Modal,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl MorphTag {
    pub fn is_verb(self) -> bool {
        matches!(
            self,
            MorphTag::VerbBase
                | MorphTag::VerbPresent
                | MorphTag::VerbPast
                | MorphTag::VerbGerund
                | MorphTag::VerbParticiple
        )
    }

    /// Nouns, proper nouns and pronouns: anything that can head a subject.
    pub fn is_nominal(self) -> bool {
        matches!(self, MorphTag::Noun | MorphTag::ProperNoun | MorphTag::Pronoun)
    }

    pub fn is_past(self) -> bool {
        self == MorphTag::VerbPast
    }

    pub fn is_present(self) -> bool {
        self == MorphTag::VerbPresent
    }

    pub fn is_punctuation(self) -> bool {
        self == MorphTag::Punctuation
    }
}

pub type TaggedToken = (String, MorphTag);

/// Sentence segmentation, word tokenization and POS tagging.
pub trait LinguisticPrimitives: Send + Sync {
    fn capabilities(&self) -> Capabilities;

    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, PrimitiveError>;

    fn tokenize_words(&self, text: &str) -> Result<Vec<String>, PrimitiveError>;

    fn tag_pos(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, PrimitiveError>;
}

/// A backend with nothing behind it. Forces the naive fallbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrimitives;

impl LinguisticPrimitives for NoPrimitives {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    fn segment_sentences(&self, _text: &str) -> Result<Vec<String>, PrimitiveError> {
        Err(PrimitiveError::Unavailable {
            capability: "segmentation",
        })
    }

    fn tokenize_words(&self, _text: &str) -> Result<Vec<String>, PrimitiveError> {
        Err(PrimitiveError::Unavailable {
            capability: "tokenization",
        })
    }

    fn tag_pos(&self, _tokens: &[String]) -> Result<Vec<TaggedToken>, PrimitiveError> {
        Err(PrimitiveError::Unavailable {
            capability: "tagging",
        })
    }
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).expect("valid sentence regex")
});

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{L}+(?:['\u{2019}]\p{L}+)*|\d+(?:[.,]\d+)*|[^\w\s]")
        .expect("valid token regex")
});

static NAIVE_SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid naive sentence regex"));

static NAIVE_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{2,}\b").expect("valid naive word regex"));

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e", "approx",
];

/// Subject pronouns after which an unknown content word is read as a verb.
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "we", "they"];

fn set_of(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static PRONOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(PRONOUNS));
static DETERMINER_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(DETERMINERS));
static PREPOSITION_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(PREPOSITIONS));
static CONJUNCTION_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(CONJUNCTIONS));
static MODAL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(MODALS));
static PAST_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| set_of(IRREGULAR_PAST));
static PARTICIPLE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set_of(IRREGULAR_PARTICIPLES));

// ---------------------------------------------------------------------------
// Naive fallbacks
// ---------------------------------------------------------------------------

/// Split on terminal punctuation, nothing more.
pub fn naive_sentences(text: &str) -> Vec<String> {
    NAIVE_SENTENCE_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lower-cased alphabetic runs of two or more letters.
pub fn naive_words(text: &str) -> Vec<String> {
    NAIVE_WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Built-in backend
// ---------------------------------------------------------------------------

/// Regex segmentation and tokenization plus a lexicon-driven tagger.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPrimitives {
    classifier: PosClassifier,
}

impl HeuristicPrimitives {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tagger whose suffix rules use tuned length thresholds.
    pub fn with_hyperparameters(hp: &Hyperparameters) -> Self {
        Self {
            classifier: PosClassifier::new(hp),
        }
    }
}

impl LinguisticPrimitives for HeuristicPrimitives {
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, PrimitiveError> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in SENTENCE_END_RE.find_iter(text) {
            if m.end() < text.len() && ends_with_abbreviation(&text[start..m.start()]) {
                continue;
            }
            push_trimmed(&mut sentences, &text[start..m.end()]);
            start = m.end();
        }
        push_trimmed(&mut sentences, &text[start..]);
        Ok(sentences)
    }

    fn tokenize_words(&self, text: &str) -> Result<Vec<String>, PrimitiveError> {
        Ok(TOKEN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn tag_pos(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, PrimitiveError> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        let mut seen_word = false;
        let mut after_subject = false;
        for token in tokens {
            let prev = tagged.last().map(|(w, t)| (w.to_lowercase(), *t));
            let context = Context {
                initial: !seen_word,
                after_subject,
                prev_tag: prev.as_ref().map(|(_, t)| *t),
                prev_word: prev.as_ref().map(|(w, _)| w.as_str()),
            };
            let tag = self.tag_token(token, &context);

            if !tag.is_punctuation() {
                seen_word = true;
            }
            let lower = token.to_lowercase();
            if SUBJECT_PRONOUNS.contains(&lower.as_str()) {
                after_subject = true;
            } else if tag != MorphTag::Adverb {
                after_subject = false;
            }
            tagged.push((token.clone(), tag));
        }
        Ok(tagged)
    }
}

struct Context<'a> {
    initial: bool,
    after_subject: bool,
    prev_tag: Option<MorphTag>,
    prev_word: Option<&'a str>,
}

impl Context<'_> {
    fn after_modal(&self) -> bool {
        self.prev_tag == Some(MorphTag::Modal)
    }

    fn after_to(&self) -> bool {
        self.prev_word == Some("to")
    }

    fn after_perfect_or_passive(&self) -> bool {
        matches!(
            self.prev_word,
            Some("has" | "have" | "had" | "is" | "are" | "was" | "were" | "be" | "been")
        )
    }
}

impl HeuristicPrimitives {
    fn tag_token(&self, token: &str, ctx: &Context<'_>) -> MorphTag {
        if !token.chars().any(char::is_alphanumeric) {
            return MorphTag::Punctuation;
        }
        if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return MorphTag::Number;
        }
        let lower = token.to_lowercase();
        if let Some((head, tail)) = lower.split_once(|c: char| c == '\'' || c == '\u{2019}') {
            if tail == "t" && head.ends_with('n') {
                return tag_negated_auxiliary(&head[..head.len() - 1]);
            }
            return self.tag_word(head, token, ctx);
        }
        self.tag_word(&lower, token, ctx)
    }

    fn tag_word(&self, lower: &str, original: &str, ctx: &Context<'_>) -> MorphTag {
        if PRONOUN_SET.contains(lower) {
            return MorphTag::Pronoun;
        }
        if DETERMINER_SET.contains(lower) {
            return MorphTag::Determiner;
        }
        if MODAL_SET.contains(lower) {
            return MorphTag::Modal;
        }
        if AUXILIARY_PRESENT.contains(&lower) {
            return if ctx.after_modal() || ctx.after_to() {
                MorphTag::VerbBase
            } else {
                MorphTag::VerbPresent
            };
        }
        if AUXILIARY_PAST.contains(&lower) || PAST_SET.contains(lower) {
            return MorphTag::VerbPast;
        }
        match lower {
            "be" => return MorphTag::VerbBase,
            "being" => return MorphTag::VerbGerund,
            _ => {}
        }
        if PARTICIPLE_SET.contains(lower) {
            return MorphTag::VerbParticiple;
        }
        if PREPOSITION_SET.contains(lower) {
            return MorphTag::Preposition;
        }
        if CONJUNCTION_SET.contains(lower) {
            return MorphTag::Conjunction;
        }
        if !ctx.initial && original.chars().next().is_some_and(char::is_uppercase) {
            return MorphTag::ProperNoun;
        }

        match self.classifier.classify(lower) {
            Some(PosTag::Verb) => verb_form(lower, ctx),
            // "finished", "tired": verbal after a subject or an auxiliary.
            Some(PosTag::Adjective)
                if lower.ends_with("ed")
                    && (ctx.after_subject || ctx.after_perfect_or_passive()) =>
            {
                verb_form(lower, ctx)
            }
            Some(PosTag::Adjective) => MorphTag::Adjective,
            Some(PosTag::Adverb) => MorphTag::Adverb,
            Some(PosTag::FunctionWord) => MorphTag::Other,
            Some(PosTag::Noun) | Some(PosTag::Other) | None => {
                if ctx.after_subject {
                    verb_form(lower, ctx)
                } else if ctx.after_modal() {
                    MorphTag::VerbBase
                } else {
                    MorphTag::Noun
                }
            }
        }
    }
}

fn tag_negated_auxiliary(aux: &str) -> MorphTag {
    match aux {
        "ca" | "wo" | "sha" => MorphTag::Modal,
        a if MODAL_SET.contains(a) => MorphTag::Modal,
        a if AUXILIARY_PAST.contains(&a) => MorphTag::VerbPast,
        _ => MorphTag::VerbPresent,
    }
}

fn verb_form(lower: &str, ctx: &Context<'_>) -> MorphTag {
    if lower.ends_with("ing") {
        return MorphTag::VerbGerund;
    }
    if lower.ends_with("ed") && !VERBS.contains(lower) {
        return if ctx.after_perfect_or_passive() {
            MorphTag::VerbParticiple
        } else {
            MorphTag::VerbPast
        };
    }
    if ctx.after_modal() || ctx.after_to() {
        return MorphTag::VerbBase;
    }
    MorphTag::VerbPresent
}

fn ends_with_abbreviation(head: &str) -> bool {
    head.split_whitespace()
        .last()
        .map(|w| {
            w.trim_start_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .is_some_and(|w| ABBREVIATIONS.contains(&w.as_str()))
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
