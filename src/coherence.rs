//! Inter-sentence coherence: adjacent-pair lexical overlap, connector
//! density and topic concentration.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::hyperparams::Hyperparameters;
use crate::lexicon::{LOGICAL_CONNECTORS, TRANSITION_WORDS};
use crate::pipeline::Sentence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowLevel {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentencePair {
    /// 1-based index of the first sentence of the pair.
    pub first_sentence: usize,
    pub similarity: f64,
    pub sentence1_preview: String,
    pub sentence2_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicConsistency {
    pub main_theme_strength: f64,
    pub topic_drift_score: f64,
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoherenceReport {
    pub average_similarity: f64,
    pub connector_count: usize,
    pub connector_ratio: f64,
    pub coherence_score: f64,
    pub logical_flow_level: FlowLevel,
    pub sentence_pair_analysis: Vec<SentencePair>,
    pub topic_consistency: TopicConsistency,
    pub insights: Vec<String>,
}

/// `|A ∩ B| / |A ∪ B|`, or `None` when either set is empty.
pub fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let shared = a.intersection(b).count();
    let union = a.union(b).count();
    Some(shared as f64 / union as f64)
}

/// Connector phrases split into words, single words and phrases alike.
static CONNECTORS: Lazy<Vec<Vec<&'static str>>> = Lazy::new(|| {
    LOGICAL_CONNECTORS
        .iter()
        .chain(TRANSITION_WORDS)
        .map(|c| c.split(' ').collect())
        .collect()
});

fn count_connectors(words: &[String]) -> usize {
    CONNECTORS
        .iter()
        .map(|phrase| {
            words
                .windows(phrase.len())
                .filter(|w| w.iter().zip(phrase).all(|(a, b)| a.as_str() == *b))
                .count()
        })
        .sum()
}

fn preview(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

#[derive(Debug, Clone)]
pub struct CoherenceAnalyzer {
    hp: Hyperparameters,
}

impl CoherenceAnalyzer {
    pub fn new(hp: &Hyperparameters) -> Self {
        Self { hp: hp.clone() }
    }

    pub fn flow_level(&self, score: f64) -> FlowLevel {
        let hp = &self.hp;
        if score >= hp.flow_excellent_min {
            FlowLevel::Excellent
        } else if score >= hp.flow_good_min {
            FlowLevel::Good
        } else if score >= hp.flow_fair_min {
            FlowLevel::Fair
        } else {
            FlowLevel::NeedsImprovement
        }
    }

    #[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
    pub fn analyze(&self, sentences: &[Sentence]) -> CoherenceReport {
        let hp = &self.hp;
        let sets: Vec<HashSet<&str>> = sentences
            .iter()
            .map(|s| {
                s.words
                    .iter()
                    .map(String::as_str)
                    .filter(|w| w.chars().all(char::is_alphabetic))
                    .collect()
            })
            .collect();

        let mut similarities = Vec::new();
        let mut pairs = Vec::new();
        for (i, window) in sets.windows(2).enumerate() {
            let Some(similarity) = jaccard(&window[0], &window[1]) else {
                continue;
            };
            similarities.push(similarity);
            if pairs.len() < hp.pair_record_cap {
                pairs.push(SentencePair {
                    first_sentence: i + 1,
                    similarity,
                    sentence1_preview: preview(&sentences[i].text, hp.preview_chars),
                    sentence2_preview: preview(&sentences[i + 1].text, hp.preview_chars),
                });
            }
        }
        let average_similarity = if similarities.is_empty() {
            0.0
        } else {
            similarities.iter().sum::<f64>() / similarities.len() as f64
        };

        let connector_count: usize = sentences.iter().map(|s| count_connectors(&s.words)).sum();
        let connector_ratio = if sentences.is_empty() {
            0.0
        } else {
            connector_count as f64 / sentences.len() as f64
        };

        let coherence_score = (average_similarity * hp.similarity_weight
            + connector_ratio * hp.connector_weight
            + hp.coherence_floor)
            .min(100.0);
        let logical_flow_level = self.flow_level(coherence_score);
        tracing::debug!(average_similarity, connector_count, coherence_score, "coherence scored");

        CoherenceReport {
            average_similarity,
            connector_count,
            connector_ratio,
            coherence_score,
            logical_flow_level,
            sentence_pair_analysis: pairs,
            topic_consistency: self.topic_consistency(sentences),
            insights: insights(sentences.len(), connector_count, coherence_score),
        }
    }

    /// Concentration of the most frequent content words. Ties rank by first
    /// appearance.
    pub fn topic_consistency(&self, sentences: &[Sentence]) -> TopicConsistency {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        let content = sentences
            .iter()
            .flat_map(|s| s.words.iter())
            .filter(|w| w.chars().count() >= self.hp.topic_min_word_len);
        for (order, word) in content.enumerate() {
            counts.entry(word.as_str()).or_insert((0, order)).0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> =
            counts.into_iter().map(|(w, (n, first))| (w, n, first)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(self.hp.topic_top_n);

        let total: usize = ranked.iter().map(|(_, n, _)| n).sum();
        let main_theme_strength = match ranked.first() {
            Some((_, top, _)) if total > 0 => *top as f64 / total as f64 * 100.0,
            _ => 0.0,
        };
        TopicConsistency {
            main_theme_strength,
            topic_drift_score: (100.0 - main_theme_strength).max(0.0),
            keywords: ranked
                .into_iter()
                .map(|(word, count, _)| Keyword {
                    word: word.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

impl Default for CoherenceAnalyzer {
    fn default() -> Self {
        Self::new(&Hyperparameters::DEFAULT)
    }
}

fn insights(sentence_count: usize, connectors: usize, score: f64) -> Vec<String> {
    if sentence_count == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    if score > 70.0 {
        out.push("Sentences are logically organised and consistent".to_string());
    } else if score < 50.0 {
        out.push("Links between sentences need strengthening".to_string());
    }
    if connectors > sentence_count {
        out.push("Logical connectors are used well".to_string());
    } else {
        out.push("Use more logical connectors between ideas".to_string());
    }
    out
}

static DEFAULT_ANALYZER: Lazy<CoherenceAnalyzer> = Lazy::new(CoherenceAnalyzer::default);

pub fn analyze(sentences: &[Sentence]) -> CoherenceReport {
    DEFAULT_ANALYZER.analyze(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str) -> Sentence {
        Sentence::naive(text)
    }

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts.iter().map(|t| sentence(t)).collect()
    }

    #[test]
    fn empty_input_sits_on_the_floor() {
        let report = analyze(&[]);
        assert_eq!(report.average_similarity, 0.0);
        assert_eq!(report.coherence_score, 20.0);
        assert_eq!(report.logical_flow_level, FlowLevel::NeedsImprovement);
        assert_eq!(report.topic_consistency.topic_drift_score, 100.0);
        assert!(report.insights.is_empty());
    }

    #[test]
    fn shared_words_raise_similarity() {
        let a: HashSet<&str> = ["we", "like", "cats"].into_iter().collect();
        let b: HashSet<&str> = ["we", "like", "dogs"].into_iter().collect();
        assert_eq!(jaccard(&a, &b), Some(0.5));
        assert_eq!(jaccard(&a, &HashSet::new()), None);
    }

    #[test]
    fn pairs_with_an_empty_side_are_skipped_not_zeroed() {
        let s = vec![
            sentence("We like cats"),
            sentence("123"),
            sentence("We like cats"),
        ];
        let report = analyze(&s);
        assert!(report.sentence_pair_analysis.is_empty());
        assert_eq!(report.average_similarity, 0.0);
    }

    #[test]
    fn contractions_stay_out_of_the_overlap() {
        let words = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        let s = vec![
            Sentence {
                words: words(&["i", "don't", "know"]),
                ..sentence("I don't know.")
            },
            Sentence {
                words: words(&["i", "don't", "care"]),
                ..sentence("I don't care.")
            },
        ];
        // {i, know} against {i, care}.
        assert!((analyze(&s).average_similarity - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn connectors_add_to_the_score() {
        let report = analyze(&sentences(&[
            "We stayed inside because it rained",
            "However the sun came out",
        ]));
        assert_eq!(report.connector_count, 2);
        assert_eq!(report.connector_ratio, 1.0);
        // No shared words: 0 * 50 + 1 * 30 + 20.
        assert!((report.coherence_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn multi_word_connectors_match_as_phrases() {
        let words: Vec<String> = ["for", "example", "cats", "and", "dogs"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(count_connectors(&words), 2);
    }

    #[test]
    fn score_is_capped_at_100() {
        let report = analyze(&sentences(&[
            "and so but or if thus hence",
            "and so but or if thus hence",
        ]));
        assert_eq!(report.coherence_score, 100.0);
        assert_eq!(report.logical_flow_level, FlowLevel::Excellent);
    }

    #[test]
    fn pair_records_are_capped_and_previews_truncated() {
        let long = "word ".repeat(60);
        let texts: Vec<&str> = std::iter::repeat(long.as_str()).take(8).collect();
        let report = analyze(&sentences(&texts));
        assert_eq!(report.sentence_pair_analysis.len(), 5);
        assert_eq!(report.sentence_pair_analysis[0].sentence1_preview.chars().count(), 100);
    }

    #[test]
    fn topic_strength_is_share_of_top_keywords() {
        let report = analyze(&sentences(&[
            "music music music makes people happy",
            "people love music",
        ]));
        let topic = &report.topic_consistency;
        assert_eq!(topic.keywords[0].word, "music");
        assert_eq!(topic.keywords[0].count, 4);
        // music 4, people 2, makes 1, happy 1, love 1 -> 4 / 9.
        assert!((topic.main_theme_strength - 400.0 / 9.0).abs() < 1e-9);
        assert_eq!(topic.keywords[1].word, "people");
    }
}
