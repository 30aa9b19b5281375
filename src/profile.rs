//! Statistical profile of a document: counts, POS ratios, diversity and
//! connector-based complexity.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::hyperparams::Hyperparameters;
use crate::lexicon::COMPLEXITY_CONNECTORS;
use crate::pipeline::{AnalysisMode, Document};
use crate::pos::{PosClassifier, PosTag};
use crate::primitives::{naive_sentences, naive_words};

/// Numeric fingerprint of one text. Ratios are percentages in `[0, 100]`;
/// `vocabulary_diversity` is in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextProfile {
    pub total_words: usize,
    pub total_sentences: usize,
    pub unique_words: usize,
    pub vocabulary_diversity: f64,
    pub avg_sentence_length: f64,
    pub noun_ratio: f64,
    pub verb_ratio: f64,
    pub adj_ratio: f64,
    pub adverb_ratio: f64,
    pub complexity_ratio: f64,
    pub pos_counts: BTreeMap<PosTag, usize>,
}

#[derive(Debug, Clone)]
pub struct StatisticalProfiler {
    classifier: PosClassifier,
    hp: Hyperparameters,
}

impl StatisticalProfiler {
    pub fn new(hp: &Hyperparameters) -> Self {
        Self {
            classifier: PosClassifier::new(hp),
            hp: hp.clone(),
        }
    }

    /// Profile from a sentence count and the document's word list.
    ///
    /// With `suffix_only` the dictionary tables are skipped, which is how
    /// the naive fallback approximates POS counts.
    pub fn profile_words<S: AsRef<str>>(
        &self,
        sentence_count: usize,
        words: &[S],
        suffix_only: bool,
    ) -> TextProfile {
        let mut pos_counts = BTreeMap::new();
        let mut classified = 0usize;
        let mut connectors = 0usize;
        let mut unique = HashSet::new();

        for word in words {
            let word = word.as_ref();
            let tag = if suffix_only {
                self.classifier.classify_suffix_only(word)
            } else {
                self.classifier.classify(word)
            };
            let Some(tag) = tag else { continue };
            classified += 1;
            *pos_counts.entry(tag).or_insert(0) += 1;
            let lower = word.to_lowercase();
            if COMPLEXITY_CONNECTORS.contains(&lower.as_str()) {
                connectors += 1;
            }
            unique.insert(lower);
        }

        if classified == 0 {
            return TextProfile {
                total_sentences: sentence_count,
                ..TextProfile::default()
            };
        }

        let ratio = |tag: PosTag| {
            pos_counts.get(&tag).copied().unwrap_or(0) as f64 / classified as f64 * 100.0
        };
        let complexity_ratio = if sentence_count > 0 {
            (connectors as f64 / sentence_count as f64 * self.hp.complexity_multiplier).min(100.0)
        } else {
            0.0
        };

        TextProfile {
            total_words: classified,
            total_sentences: sentence_count,
            unique_words: unique.len(),
            vocabulary_diversity: unique.len() as f64 / classified as f64,
            avg_sentence_length: if sentence_count > 0 {
                classified as f64 / sentence_count as f64
            } else {
                0.0
            },
            noun_ratio: ratio(PosTag::Noun),
            verb_ratio: ratio(PosTag::Verb),
            adj_ratio: ratio(PosTag::Adjective),
            adverb_ratio: ratio(PosTag::Adverb),
            complexity_ratio,
            pos_counts,
        }
    }

    #[tracing::instrument(skip_all, fields(mode = ?doc.mode))]
    pub fn profile_document(&self, doc: &Document) -> TextProfile {
        let suffix_only = doc.mode == AnalysisMode::Naive;
        let profile = self.profile_words(doc.sentences.len(), &doc.words, suffix_only);
        tracing::debug!(
            words = profile.total_words,
            sentences = profile.total_sentences,
            "text profiled"
        );
        profile
    }

    /// Regex tokenization plus suffix-only POS. Same shape as
    /// [`profile_document`](Self::profile_document), lower fidelity.
    pub fn naive_profile(&self, text: &str) -> TextProfile {
        let sentences = naive_sentences(text);
        let words = naive_words(text);
        self.profile_words(sentences.len(), &words, true)
    }

    /// Short human-readable observations about sentence length and variety.
    pub fn insights(&self, profile: &TextProfile) -> Vec<String> {
        if profile.total_words == 0 {
            return Vec::new();
        }
        let hp = &self.hp;
        let mut out = Vec::new();
        let len = profile.avg_sentence_length;
        out.push(
            if len > hp.long_sentence_insight {
                "Long sentences suggest the text handles complex ideas"
            } else if len < hp.short_sentence_insight {
                "Short sentences give the text a concise style"
            } else {
                "Sentence length is well balanced and easy to read"
            }
            .to_string(),
        );
        if profile.vocabulary_diversity > hp.rich_diversity_insight {
            out.push("Word choice is highly varied".to_string());
        } else if profile.vocabulary_diversity < hp.poor_diversity_insight {
            out.push("Vocabulary diversity needs work".to_string());
        }
        out
    }
}

impl Default for StatisticalProfiler {
    fn default() -> Self {
        Self::new(&Hyperparameters::DEFAULT)
    }
}

static DEFAULT_PROFILER: Lazy<StatisticalProfiler> = Lazy::new(StatisticalProfiler::default);

pub fn profile_document(doc: &Document) -> TextProfile {
    DEFAULT_PROFILER.profile_document(doc)
}

pub fn naive_profile(text: &str) -> TextProfile {
    DEFAULT_PROFILER.naive_profile(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        let p = naive_profile("");
        assert_eq!(p, TextProfile::default());
        assert!(DEFAULT_PROFILER.insights(&p).is_empty());
    }

    #[test]
    fn ratios_are_share_of_classified_words() {
        let words = ["student", "runs", "happy", "quickly", "the"];
        let p = DEFAULT_PROFILER.profile_words(1, &words, false);
        assert_eq!(p.total_words, 5);
        assert_eq!(p.noun_ratio, 20.0);
        assert_eq!(p.verb_ratio, 20.0);
        assert_eq!(p.adj_ratio, 20.0);
        assert_eq!(p.adverb_ratio, 20.0);
        assert_eq!(p.pos_counts.get(&PosTag::FunctionWord), Some(&1));
        assert_eq!(p.avg_sentence_length, 5.0);
    }

    #[test]
    fn single_letters_stay_out_of_the_denominator() {
        let p = DEFAULT_PROFILER.profile_words(1, &["a", "student", "i"], false);
        assert_eq!(p.total_words, 1);
        assert_eq!(p.noun_ratio, 100.0);
    }

    #[test]
    fn complexity_counts_connectors_per_sentence() {
        let words = ["however", "we", "stayed", "because", "it", "rained"];
        let p = DEFAULT_PROFILER.profile_words(2, &words, false);
        // Two connectors over two sentences, times 50.
        assert_eq!(p.complexity_ratio, 50.0);

        let many = ["because"; 10];
        let p = DEFAULT_PROFILER.profile_words(1, &many, false);
        assert_eq!(p.complexity_ratio, 100.0);
    }

    #[test]
    fn naive_profile_uses_regex_sentences() {
        let p = naive_profile("The cat sat. It was warm! Was it?");
        assert_eq!(p.total_sentences, 3);
        assert_eq!(p.total_words, 8);
        assert!(p.noun_ratio + p.verb_ratio + p.adj_ratio <= 100.0);
    }

    #[test]
    fn insights_follow_thresholds() {
        let p = TextProfile {
            total_words: 20,
            avg_sentence_length: 20.0,
            vocabulary_diversity: 0.9,
            ..TextProfile::default()
        };
        let insights = DEFAULT_PROFILER.insights(&p);
        assert_eq!(insights.len(), 2);
        assert!(insights[0].starts_with("Long sentences"));
        assert_eq!(insights[1], "Word choice is highly varied");
    }
}
