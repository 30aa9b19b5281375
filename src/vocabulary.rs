//! Vocabulary leveling: per-word sophistication tiers, diversity and the
//! academic-catalogue sub-score.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::hyperparams::Hyperparameters;
use crate::lexicon::{ACADEMIC, ACADEMIC_CATALOGUE};
use crate::pos::normalize;
use crate::rules::{Predicate, RuleSet};

const ADVANCED_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ous", "ive", "able", "ible", "ful", "less", "ence",
    "ance", "ize", "ise", "ate",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyTier {
    Basic,
    Intermediate,
    Advanced,
    Academic,
}

/// Overall label derived from the sophistication score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyLevel {
    Advanced,
    Intermediate,
    Basic,
    Beginner,
}

impl VocabularyLevel {
    pub fn description(self) -> &'static str {
        match self {
            VocabularyLevel::Advanced => "Rich and precise word choice",
            VocabularyLevel::Intermediate => "Appropriate command of vocabulary",
            VocabularyLevel::Basic => "Basic vocabulary use",
            VocabularyLevel::Beginner => "Vocabulary needs expanding",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyProfile {
    pub total_words: usize,
    pub unique_words: usize,
    pub tier_counts: BTreeMap<VocabularyTier, usize>,
    /// Words found anywhere in the academic catalogue.
    pub academic_count: usize,
    /// Catalogue words as a percentage of all words.
    pub advanced_vocabulary_ratio: f64,
    /// `min(advanced_vocabulary_ratio * 2, 50)`.
    pub academic_score: f64,
    pub avg_word_length: f64,
    /// Unique words as a percentage of all words.
    pub unique_word_ratio: f64,
    /// Unique words over all words, in `[0, 1]`.
    pub vocabulary_diversity: f64,
}

/// Length-only word counts, with catalogue hits counted alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LevelAnalysis {
    pub basic_words: usize,
    pub intermediate_words: usize,
    pub advanced_words: usize,
    pub academic_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryUsage {
    pub category: &'static str,
    pub count: usize,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyReport {
    #[serde(flatten)]
    pub profile: VocabularyProfile,
    pub level_analysis: LevelAnalysis,
    pub category_usage: Vec<CategoryUsage>,
    pub sophistication_score: f64,
    pub level: VocabularyLevel,
    pub level_description: &'static str,
    pub recommendations: Vec<String>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct VocabularyLeveler {
    rules: RuleSet<VocabularyTier>,
    hp: Hyperparameters,
}

impl VocabularyLeveler {
    pub fn new(hp: &Hyperparameters) -> Self {
        let rules = RuleSet::new(VocabularyTier::Intermediate)
            .rule(
                "academic catalogue",
                Predicate::InSet(&ACADEMIC),
                VocabularyTier::Academic,
            )
            .rule(
                "long word",
                Predicate::MinLength(hp.advanced_min_len),
                VocabularyTier::Advanced,
            )
            .rule(
                "advanced suffix",
                Predicate::Suffix {
                    suffixes: ADVANCED_SUFFIXES,
                    min_len: 0,
                },
                VocabularyTier::Advanced,
            )
            .rule(
                "short word",
                Predicate::MaxLength(hp.basic_max_len),
                VocabularyTier::Basic,
            );
        Self {
            rules,
            hp: hp.clone(),
        }
    }

    /// Tier of a single word. `None` for tokens with no letters.
    pub fn level(&self, word: &str) -> Option<VocabularyTier> {
        let word = normalize(word);
        if word.is_empty() {
            return None;
        }
        Some(self.rules.apply(&word).category)
    }

    pub fn profile<S: AsRef<str>>(&self, words: &[S]) -> VocabularyProfile {
        let words: Vec<String> = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        let total = words.len();

        let mut tier_counts: BTreeMap<VocabularyTier, usize> = [
            VocabularyTier::Basic,
            VocabularyTier::Intermediate,
            VocabularyTier::Advanced,
            VocabularyTier::Academic,
        ]
        .into_iter()
        .map(|t| (t, 0))
        .collect();
        for w in &words {
            *tier_counts
                .entry(self.rules.apply(w).category)
                .or_insert(0) += 1;
        }

        let unique = words.iter().collect::<HashSet<_>>().len();
        let academic_count = words.iter().filter(|w| ACADEMIC.contains(w.as_str())).count();
        let advanced_vocabulary_ratio = percent(academic_count, total);
        let letters: usize = words.iter().map(|w| w.chars().count()).sum();

        VocabularyProfile {
            total_words: total,
            unique_words: unique,
            tier_counts,
            academic_count,
            advanced_vocabulary_ratio,
            academic_score: (advanced_vocabulary_ratio * self.hp.advanced_ratio_multiplier)
                .min(self.hp.advanced_ratio_cap),
            avg_word_length: if total > 0 {
                letters as f64 / total as f64
            } else {
                0.0
            },
            unique_word_ratio: percent(unique, total),
            vocabulary_diversity: if total > 0 {
                unique as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn analyze<S: AsRef<str>>(&self, words: &[S]) -> VocabularyReport {
        let profile = self.profile(words);
        let hp = &self.hp;

        let normalized: Vec<String> = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        let mut level_analysis = LevelAnalysis {
            academic_words: profile.academic_count,
            ..LevelAnalysis::default()
        };
        for w in &normalized {
            match w.chars().count() {
                n if n <= hp.basic_max_len => level_analysis.basic_words += 1,
                n if n < hp.advanced_min_len => level_analysis.intermediate_words += 1,
                _ => level_analysis.advanced_words += 1,
            }
        }
        let category_usage: Vec<CategoryUsage> = ACADEMIC_CATALOGUE
            .iter()
            .map(|&(category, list)| {
                let count = normalized
                    .iter()
                    .filter(|w| list.contains(&w.as_str()))
                    .count();
                CategoryUsage {
                    category,
                    count,
                    ratio: percent(count, profile.total_words),
                }
            })
            .collect();

        let sophistication_score = ((profile.vocabulary_diversity * 100.0).min(hp.diversity_cap)
            + profile.academic_score)
            .min(100.0);
        let level = if sophistication_score >= hp.vocab_advanced_min {
            VocabularyLevel::Advanced
        } else if sophistication_score >= hp.vocab_intermediate_min {
            VocabularyLevel::Intermediate
        } else if sophistication_score >= hp.vocab_basic_min {
            VocabularyLevel::Basic
        } else {
            VocabularyLevel::Beginner
        };
        tracing::debug!(sophistication_score, ?level, "vocabulary leveled");

        let recommendations =
            self.recommendations(profile.advanced_vocabulary_ratio, sophistication_score);
        let insights = self.insights(profile.advanced_vocabulary_ratio, &category_usage);
        VocabularyReport {
            profile,
            level_analysis,
            category_usage,
            sophistication_score,
            level,
            level_description: level.description(),
            recommendations,
            insights,
        }
    }

    fn insights(&self, advanced_ratio: f64, usage: &[CategoryUsage]) -> Vec<String> {
        let hp = &self.hp;
        let mut out = Vec::new();
        if advanced_ratio > hp.vocab_insight_rich_ratio {
            out.push("Advanced vocabulary is used well".to_string());
        } else if advanced_ratio < hp.vocab_insight_poor_ratio {
            out.push("Use more advanced vocabulary".to_string());
        }
        for c in usage.iter().filter(|c| c.ratio > hp.category_insight_ratio) {
            match c.category {
                "academic" => out.push("Academic expressions are plentiful".to_string()),
                "transitions" => out.push("Transitions link ideas logically".to_string()),
                _ => {}
            }
        }
        out
    }

    fn recommendations(&self, advanced_ratio: f64, score: f64) -> Vec<String> {
        let mut out = Vec::new();
        if advanced_ratio < 10.0 {
            out.push(format!(
                "Use more advanced vocabulary (currently {advanced_ratio:.1}%)"
            ));
            out.push("Practise academic verbs such as analyze, evaluate and demonstrate".into());
        }
        if score < self.hp.vocab_intermediate_min {
            out.push("Reach for synonyms to vary your word choice".into());
            out.push("Study vocabulary specific to the subjects you write about".into());
        }
        if advanced_ratio > 20.0 {
            out.push("Strong command of advanced vocabulary".into());
        }
        if out.is_empty() {
            out.push("Current vocabulary level is appropriate".into());
        }
        out.truncate(self.hp.vocab_recommendation_cap);
        out
    }
}

impl Default for VocabularyLeveler {
    fn default() -> Self {
        Self::new(&Hyperparameters::DEFAULT)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

static DEFAULT_LEVELER: Lazy<VocabularyLeveler> = Lazy::new(VocabularyLeveler::default);

pub fn level(word: &str) -> Option<VocabularyTier> {
    DEFAULT_LEVELER.level(word)
}

pub fn profile<S: AsRef<str>>(words: &[S]) -> VocabularyProfile {
    DEFAULT_LEVELER.profile(words)
}

pub fn analyze<S: AsRef<str>>(words: &[S]) -> VocabularyReport {
    DEFAULT_LEVELER.analyze(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_length_and_suffix() {
        assert_eq!(level("cat"), Some(VocabularyTier::Basic));
        assert_eq!(level("house"), Some(VocabularyTier::Intermediate));
        assert_eq!(level("beautiful"), Some(VocabularyTier::Advanced));
        assert_eq!(level("kindness"), Some(VocabularyTier::Advanced));
        assert_eq!(level("create"), Some(VocabularyTier::Advanced));
        // A short word with an advanced suffix is not basic.
        for word in ["late", "size", "rise", "date", "able"] {
            assert_eq!(level(word), Some(VocabularyTier::Advanced), "{word}");
        }
        assert_eq!(level("Furthermore,"), Some(VocabularyTier::Academic));
        assert_eq!(level("..."), None);
    }

    #[test]
    fn empty_input_profiles_to_zero() {
        let p = profile::<&str>(&[]);
        assert_eq!(p.total_words, 0);
        assert_eq!(p.vocabulary_diversity, 0.0);
        assert_eq!(p.advanced_vocabulary_ratio, 0.0);
        let report = analyze::<&str>(&[]);
        assert_eq!(report.sophistication_score, 0.0);
        assert_eq!(report.level, VocabularyLevel::Beginner);
    }

    #[test]
    fn tier_counts_partition_the_words() {
        let words = ["the", "cat", "demonstrates", "wonderful", "significant", "ideas"];
        let p = profile(&words);
        assert_eq!(p.tier_counts.values().sum::<usize>(), p.total_words);
        assert_eq!(p.academic_count, 1);
    }

    #[test]
    fn catalogue_words_score_once_but_fill_every_category() {
        // "demonstrate" sits in both the academic and advanced-verb lists.
        let report = analyze(&["demonstrate", "cat"]);
        assert_eq!(report.profile.academic_count, 1);
        assert_eq!(report.profile.advanced_vocabulary_ratio, 50.0);
        let hits: usize = report.category_usage.iter().map(|c| c.count).sum();
        assert_eq!(hits, 2);
    }

    #[test]
    fn sophistication_blends_diversity_and_catalogue_ratio() {
        let words = ["furthermore", "demonstrate", "significant", "moreover"];
        let report = analyze(&words);
        assert_eq!(report.sophistication_score, 100.0);
        assert_eq!(report.level, VocabularyLevel::Advanced);

        let repeated = ["cat"; 10];
        let report = analyze(&repeated);
        assert!((report.sophistication_score - 10.0).abs() < 1e-9);
        assert_eq!(report.level, VocabularyLevel::Beginner);
    }

    #[test]
    fn level_analysis_counts_by_length_alone() {
        let report = analyze(&["cat", "house", "wonderful", "furthermore"]);
        let la = report.level_analysis;
        assert_eq!(la.basic_words, 1);
        assert_eq!(la.intermediate_words, 1);
        assert_eq!(la.advanced_words, 2);
        assert_eq!(la.academic_words, 1);
    }

    #[test]
    fn insights_follow_catalogue_ratios() {
        let rich = analyze(&["furthermore", "demonstrate", "cat", "dog"]);
        assert_eq!(
            rich.insights,
            vec![
                "Advanced vocabulary is used well",
                "Academic expressions are plentiful",
                "Transitions link ideas logically",
            ]
        );

        let plain = analyze(&["cat", "dog", "sun"]);
        assert_eq!(plain.insights, vec!["Use more advanced vocabulary"]);

        // Between the two ratio thresholds: no ratio insight, but the
        // transition share (1 in 40) is still above 2%.
        let mut words = vec!["cat"; 39];
        words.push("however");
        let middling = analyze(&words);
        assert_eq!(middling.insights, vec!["Transitions link ideas logically"]);
    }

    #[test]
    fn recommendations_are_capped() {
        let report = analyze(&["cat", "cat", "dog"]);
        assert!(!report.recommendations.is_empty());
        assert!(report.recommendations.len() <= 3);
    }
}
