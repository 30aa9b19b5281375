//! Tunable constants for every scoring formula in the pipeline.

use serde::{Deserialize, Serialize};

/// Every numeric constant used by the analyses.
///
/// The defaults reproduce the reference scoring. They are heuristics, not
/// derived values, so callers may pass a tuned copy to
/// [`Analyzer::with_hyperparameters`](crate::Analyzer::with_hyperparameters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    // POS classifier
    pub adverb_ly_min_len: usize,
    pub verb_ed_min_len: usize,
    pub verb_ing_min_len: usize,

    // Vocabulary leveler
    pub basic_max_len: usize,
    pub advanced_min_len: usize,
    pub diversity_cap: f64,
    pub advanced_ratio_multiplier: f64,
    pub advanced_ratio_cap: f64,
    pub vocab_advanced_min: f64,
    pub vocab_intermediate_min: f64,
    pub vocab_basic_min: f64,
    pub vocab_recommendation_cap: usize,
    pub vocab_insight_rich_ratio: f64,
    pub vocab_insight_poor_ratio: f64,
    pub category_insight_ratio: f64,

    // Statistical profiler
    pub min_word_len: usize,
    pub complexity_multiplier: f64,
    pub long_sentence_insight: f64,
    pub short_sentence_insight: f64,
    pub rich_diversity_insight: f64,
    pub poor_diversity_insight: f64,

    // Benchmark advice, measured against the reference benchmark
    pub advice_noun_gap: f64,
    pub advice_verb_gap: f64,
    pub advice_adj_shortfall: f64,
    pub advice_adj_excess: f64,
    pub advice_adj_growth_gap: f64,
    pub advice_diversity_gap: f64,
    pub advice_complexity_gap: f64,
    pub advice_complexity_excess: f64,
    pub strength_noun_tolerance: f64,
    pub strength_verb_tolerance: f64,
    pub strength_adj_tolerance: f64,
    pub strength_complexity_tolerance: f64,
    pub balanced_sentence_min: f64,
    pub balanced_sentence_max: f64,
    pub growth_area_cap: usize,

    // Grammar detector
    pub long_sentence_words: usize,
    pub short_sentence_words: usize,
    pub grammar_issue_penalty: f64,
    pub improvement_area_cap: usize,

    // Coherence analyzer
    pub similarity_weight: f64,
    pub connector_weight: f64,
    pub coherence_floor: f64,
    pub flow_excellent_min: f64,
    pub flow_good_min: f64,
    pub flow_fair_min: f64,
    pub pair_record_cap: usize,
    pub preview_chars: usize,
    pub topic_top_n: usize,
    pub topic_min_word_len: usize,

    // Composite scorer
    pub statistical_weight: f64,
    pub vocabulary_weight: f64,
    pub grammar_weight: f64,
    pub coherence_weight: f64,
    pub level_excellent_min: f64,
    pub level_good_min: f64,
    pub level_average_min: f64,
    pub strength_min: f64,
    pub immediate_action_below: f64,
    pub short_term_goal_below: f64,
}

impl Hyperparameters {
    pub const DEFAULT: Hyperparameters = Hyperparameters {
        adverb_ly_min_len: 4,
        verb_ed_min_len: 4,
        verb_ing_min_len: 5,

        basic_max_len: 4,
        advanced_min_len: 8,
        diversity_cap: 50.0,
        advanced_ratio_multiplier: 2.0,
        advanced_ratio_cap: 50.0,
        vocab_advanced_min: 80.0,
        vocab_intermediate_min: 60.0,
        vocab_basic_min: 40.0,
        vocab_recommendation_cap: 3,
        vocab_insight_rich_ratio: 5.0,
        vocab_insight_poor_ratio: 2.0,
        category_insight_ratio: 2.0,

        min_word_len: 2,
        complexity_multiplier: 50.0,
        long_sentence_insight: 15.0,
        short_sentence_insight: 8.0,
        rich_diversity_insight: 0.7,
        poor_diversity_insight: 0.5,

        advice_noun_gap: 8.0,
        advice_verb_gap: 5.0,
        advice_adj_shortfall: 3.0,
        advice_adj_excess: 8.0,
        advice_adj_growth_gap: 5.0,
        advice_diversity_gap: 0.1,
        advice_complexity_gap: 15.0,
        advice_complexity_excess: 20.0,
        strength_noun_tolerance: 5.0,
        strength_verb_tolerance: 3.0,
        strength_adj_tolerance: 3.0,
        strength_complexity_tolerance: 10.0,
        balanced_sentence_min: 8.0,
        balanced_sentence_max: 15.0,
        growth_area_cap: 3,

        long_sentence_words: 25,
        short_sentence_words: 3,
        grammar_issue_penalty: 20.0,
        improvement_area_cap: 3,

        similarity_weight: 50.0,
        connector_weight: 30.0,
        coherence_floor: 20.0,
        flow_excellent_min: 80.0,
        flow_good_min: 60.0,
        flow_fair_min: 40.0,
        pair_record_cap: 5,
        preview_chars: 100,
        topic_top_n: 5,
        topic_min_word_len: 4,

        statistical_weight: 0.25,
        vocabulary_weight: 0.25,
        grammar_weight: 0.25,
        coherence_weight: 0.25,
        level_excellent_min: 85.0,
        level_good_min: 70.0,
        level_average_min: 55.0,
        strength_min: 70.0,
        immediate_action_below: 60.0,
        short_term_goal_below: 70.0,
    };
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
