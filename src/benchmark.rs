//! Similarity of a [`TextProfile`] to fixed reference writing styles.

use serde::Serialize;

use crate::composite::Priority;
use crate::error::ComponentError;
use crate::hyperparams::Hyperparameters;
use crate::profile::TextProfile;

/// A reference statistical fingerprint. Immutable once defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkProfile {
    pub name: &'static str,
    pub label: &'static str,
    pub noun_ratio: f64,
    pub verb_ratio: f64,
    pub adj_ratio: f64,
    pub complexity_ratio: f64,
    pub vocabulary_diversity: f64,
    pub avg_sentence_length: f64,
}

const CATALOGUE: &[BenchmarkProfile] = &[
    BenchmarkProfile {
        name: "middle-school-excellent",
        label: "Excellent middle-school essay",
        noun_ratio: 42.1,
        verb_ratio: 22.8,
        adj_ratio: 15.3,
        complexity_ratio: 58.7,
        vocabulary_diversity: 0.72,
        avg_sentence_length: 12.5,
    },
    BenchmarkProfile {
        name: "academic-essay",
        label: "Academic essay",
        noun_ratio: 45.2,
        verb_ratio: 18.3,
        adj_ratio: 12.1,
        complexity_ratio: 78.5,
        vocabulary_diversity: 0.85,
        avg_sentence_length: 16.2,
    },
    BenchmarkProfile {
        name: "creative-writing",
        label: "Creative writing",
        noun_ratio: 38.7,
        verb_ratio: 25.4,
        adj_ratio: 18.2,
        complexity_ratio: 65.2,
        vocabulary_diversity: 0.78,
        avg_sentence_length: 14.1,
    },
];

/// The built-in reference styles.
pub fn catalogue() -> &'static [BenchmarkProfile] {
    CATALOGUE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Noun,
    Verb,
    Adjective,
    Diversity,
    SentenceLength,
    Complexity,
}

impl Metric {
    /// Metrics that make up the similarity mean. `Complexity` is reported
    /// alongside but never averaged in.
    pub const SCORED: [Metric; 5] = [
        Metric::Noun,
        Metric::Verb,
        Metric::Adjective,
        Metric::Diversity,
        Metric::SentenceLength,
    ];

    fn of_profile(self, p: &TextProfile) -> f64 {
        match self {
            Metric::Noun => p.noun_ratio,
            Metric::Verb => p.verb_ratio,
            Metric::Adjective => p.adj_ratio,
            Metric::Diversity => p.vocabulary_diversity,
            Metric::SentenceLength => p.avg_sentence_length,
            Metric::Complexity => p.complexity_ratio,
        }
    }

    fn of_benchmark(self, b: &BenchmarkProfile) -> f64 {
        match self {
            Metric::Noun => b.noun_ratio,
            Metric::Verb => b.verb_ratio,
            Metric::Adjective => b.adj_ratio,
            Metric::Diversity => b.vocabulary_diversity,
            Metric::SentenceLength => b.avg_sentence_length,
            Metric::Complexity => b.complexity_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricScore {
    pub metric: Metric,
    pub user_value: f64,
    pub benchmark_value: f64,
    /// `None` when the benchmark value is zero and the metric is skipped.
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub benchmark: &'static str,
    pub label: &'static str,
    pub similarity_score: f64,
    pub individual_scores: Vec<MetricScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticalReport {
    pub profile: TextProfile,
    pub comparisons: Vec<BenchmarkComparison>,
    pub best_match: &'static str,
    /// Similarity to the best-matching benchmark.
    pub statistical_score: f64,
    pub insights: Vec<String>,
    /// Advice measured against the reference (first) benchmark.
    pub improvement_suggestions: Vec<Suggestion>,
    pub writing_strengths: Vec<&'static str>,
    pub growth_areas: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceArea {
    NounUsage,
    VerbUsage,
    AdjectiveUsage,
    VocabularyDiversity,
    SentenceStructure,
    Overall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub area: AdviceArea,
    pub suggestion: &'static str,
    pub priority: Priority,
}

/// `max(0, 100 - |user - reference| / reference * 100)`, or `None` for a
/// zero reference.
pub fn metric_score(user: f64, reference: f64) -> Option<f64> {
    if reference == 0.0 {
        return None;
    }
    let relative = (user - reference).abs() / reference;
    Some((100.0 - relative * 100.0).max(0.0))
}

pub fn compare(profile: &TextProfile, benchmark: &BenchmarkProfile) -> BenchmarkComparison {
    let score_of = |metric: Metric| {
        let user_value = metric.of_profile(profile);
        let benchmark_value = metric.of_benchmark(benchmark);
        MetricScore {
            metric,
            user_value,
            benchmark_value,
            score: metric_score(user_value, benchmark_value),
        }
    };
    let mut individual_scores: Vec<MetricScore> =
        Metric::SCORED.iter().map(|&m| score_of(m)).collect();

    let available: Vec<f64> = individual_scores.iter().filter_map(|s| s.score).collect();
    let similarity_score = if available.is_empty() {
        0.0
    } else {
        available.iter().sum::<f64>() / available.len() as f64
    };

    individual_scores.push(score_of(Metric::Complexity));
    BenchmarkComparison {
        benchmark: benchmark.name,
        label: benchmark.label,
        similarity_score,
        individual_scores,
    }
}

/// Reject benchmarks that could not produce a meaningful comparison.
pub fn validate(benchmarks: &[BenchmarkProfile]) -> Result<(), ComponentError> {
    if benchmarks.is_empty() {
        return Err(ComponentError::EmptyCatalogue);
    }
    for b in benchmarks {
        let values = Metric::SCORED.map(|m| m.of_benchmark(b));
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ComponentError::InvalidBenchmark {
                name: b.name.to_string(),
                reason: format!("metric value {bad} is not a finite non-negative number"),
            });
        }
        if values.iter().all(|v| *v == 0.0) {
            return Err(ComponentError::InvalidBenchmark {
                name: b.name.to_string(),
                reason: "every metric is zero".to_string(),
            });
        }
    }
    Ok(())
}

/// Compare against every benchmark and pick the closest. Ties keep the
/// earlier catalogue entry.
pub fn compare_all(
    profile: &TextProfile,
    benchmarks: &[BenchmarkProfile],
) -> Result<(Vec<BenchmarkComparison>, usize), ComponentError> {
    validate(benchmarks)?;
    let comparisons: Vec<BenchmarkComparison> =
        benchmarks.iter().map(|b| compare(profile, b)).collect();
    let mut best = 0;
    for (i, c) in comparisons.iter().enumerate() {
        if c.similarity_score > comparisons[best].similarity_score {
            best = i;
        }
    }
    Ok((comparisons, best))
}

// ---------------------------------------------------------------------------
// Advice
// ---------------------------------------------------------------------------

fn suggest(area: AdviceArea, suggestion: &'static str, priority: Priority) -> Suggestion {
    Suggestion {
        area,
        suggestion,
        priority,
    }
}

/// Signed gaps to `reference` produce prioritised suggestions. Never empty.
pub fn improvement_suggestions(
    profile: &TextProfile,
    reference: &BenchmarkProfile,
    hp: &Hyperparameters,
) -> Vec<Suggestion> {
    let mut out = Vec::new();

    let noun = profile.noun_ratio - reference.noun_ratio;
    if noun > hp.advice_noun_gap {
        out.push(suggest(
            AdviceArea::NounUsage,
            "Use fewer nouns and let verbs and adjectives carry the description",
            Priority::High,
        ));
    } else if noun < -hp.advice_noun_gap {
        out.push(suggest(
            AdviceArea::NounUsage,
            "Use more specific, precise nouns to make the content clear",
            Priority::Medium,
        ));
    }

    if profile.verb_ratio - reference.verb_ratio < -hp.advice_verb_gap {
        out.push(suggest(
            AdviceArea::VerbUsage,
            "Bring the writing to life with a wider range of action verbs",
            Priority::High,
        ));
    }

    let adj = profile.adj_ratio - reference.adj_ratio;
    if adj < -hp.advice_adj_shortfall {
        out.push(suggest(
            AdviceArea::AdjectiveUsage,
            "Add well-chosen adjectives to make descriptions vivid",
            Priority::Medium,
        ));
    } else if adj > hp.advice_adj_excess {
        out.push(suggest(
            AdviceArea::AdjectiveUsage,
            "Trim excess adjectives and focus on the key content",
            Priority::Low,
        ));
    }

    if profile.vocabulary_diversity - reference.vocabulary_diversity < -hp.advice_diversity_gap {
        out.push(suggest(
            AdviceArea::VocabularyDiversity,
            "Avoid repeating the same words and vary your vocabulary",
            Priority::High,
        ));
    }

    let complexity = profile.complexity_ratio - reference.complexity_ratio;
    if complexity < -hp.advice_complexity_gap {
        out.push(suggest(
            AdviceArea::SentenceStructure,
            "Mix simple and complex sentences to improve the flow",
            Priority::Medium,
        ));
    } else if complexity > hp.advice_complexity_excess {
        out.push(suggest(
            AdviceArea::SentenceStructure,
            "Prefer clear, concise sentences over very complex ones",
            Priority::Medium,
        ));
    }

    if out.is_empty() {
        out.push(suggest(
            AdviceArea::Overall,
            "Balanced writing; try more creative expression next",
            Priority::Low,
        ));
    }
    out
}

/// Metrics within tolerance of `reference`. Never empty.
pub fn writing_strengths(
    profile: &TextProfile,
    reference: &BenchmarkProfile,
    hp: &Hyperparameters,
) -> Vec<&'static str> {
    let close = |user: f64, target: f64, tolerance: f64| (user - target).abs() <= tolerance;
    let mut out = Vec::new();
    if close(profile.noun_ratio, reference.noun_ratio, hp.strength_noun_tolerance) {
        out.push("Noun use is appropriate and well balanced");
    }
    if close(profile.verb_ratio, reference.verb_ratio, hp.strength_verb_tolerance) {
        out.push("Verb use is strong and keeps the writing lively");
    }
    if close(profile.adj_ratio, reference.adj_ratio, hp.strength_adj_tolerance) {
        out.push("Adjectives are well judged and descriptions are rich");
    }
    if profile.vocabulary_diversity >= reference.vocabulary_diversity {
        out.push("Vocabulary is varied and rich");
    }
    if close(
        profile.complexity_ratio,
        reference.complexity_ratio,
        hp.strength_complexity_tolerance,
    ) {
        out.push("Sentence structure is suitably complex");
    }
    if (hp.balanced_sentence_min..=hp.balanced_sentence_max).contains(&profile.avg_sentence_length)
    {
        out.push("Sentence length is comfortable to read");
    }
    if out.is_empty() {
        out.push("Steady practice is building your skills");
    }
    out
}

/// The largest gaps to `reference`, widest first. Never empty.
pub fn growth_areas(
    profile: &TextProfile,
    reference: &BenchmarkProfile,
    hp: &Hyperparameters,
) -> Vec<&'static str> {
    let mut gaps: Vec<(&'static str, f64)> = Vec::new();
    let noun = (profile.noun_ratio - reference.noun_ratio).abs();
    if noun > hp.advice_noun_gap {
        gaps.push(("Balance noun use", noun));
    }
    let verb = (profile.verb_ratio - reference.verb_ratio).abs();
    if verb > hp.advice_verb_gap {
        gaps.push(("Vary verb use", verb));
    }
    let adj = (profile.adj_ratio - reference.adj_ratio).abs();
    if adj > hp.advice_adj_growth_gap {
        gaps.push(("Adjust adjective use", adj));
    }
    if profile.vocabulary_diversity < reference.vocabulary_diversity - hp.advice_diversity_gap {
        let gap = (reference.vocabulary_diversity - profile.vocabulary_diversity) * 100.0;
        gaps.push(("Increase vocabulary diversity", gap));
    }
    let complexity = (profile.complexity_ratio - reference.complexity_ratio).abs();
    if complexity > hp.advice_complexity_gap {
        gaps.push(("Improve sentence structure", complexity));
    }

    // Stable: equal gaps keep the order above.
    gaps.sort_by(|a, b| b.1.total_cmp(&a.1));
    let mut out: Vec<&'static str> = gaps
        .into_iter()
        .take(hp.growth_area_cap)
        .map(|(area, _)| area)
        .collect();
    if out.is_empty() {
        out.push("Keep the current level and focus on creativity");
    }
    out
}

#[tracing::instrument(skip_all, fields(benchmarks = benchmarks.len()))]
pub fn report(
    profile: TextProfile,
    insights: Vec<String>,
    benchmarks: &[BenchmarkProfile],
    hp: &Hyperparameters,
) -> Result<StatisticalReport, ComponentError> {
    let (comparisons, best) = compare_all(&profile, benchmarks)?;
    let best_match = comparisons[best].benchmark;
    let statistical_score = comparisons[best].similarity_score;
    tracing::debug!(best_match, statistical_score, "benchmarks compared");

    // compare_all rejects an empty catalogue.
    let reference = &benchmarks[0];
    Ok(StatisticalReport {
        improvement_suggestions: improvement_suggestions(&profile, reference, hp),
        writing_strengths: writing_strengths(&profile, reference, hp),
        growth_areas: growth_areas(&profile, reference, hp),
        profile,
        comparisons,
        best_match,
        statistical_score,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_like(b: &BenchmarkProfile) -> TextProfile {
        TextProfile {
            total_words: 100,
            total_sentences: 8,
            noun_ratio: b.noun_ratio,
            verb_ratio: b.verb_ratio,
            adj_ratio: b.adj_ratio,
            complexity_ratio: b.complexity_ratio,
            vocabulary_diversity: b.vocabulary_diversity,
            avg_sentence_length: b.avg_sentence_length,
            ..TextProfile::default()
        }
    }

    #[test]
    fn catalogue_is_valid() {
        assert!(catalogue().len() >= 3);
        assert!(validate(catalogue()).is_ok());
    }

    #[test]
    fn identical_profile_scores_100() {
        let b = &catalogue()[1];
        let c = compare(&profile_like(b), b);
        assert!((c.similarity_score - 100.0).abs() < 1e-9);
        assert_eq!(c.individual_scores.len(), 6);
    }

    #[test]
    fn metric_score_floors_at_zero() {
        assert_eq!(metric_score(30.0, 10.0), Some(0.0));
        assert_eq!(metric_score(15.0, 10.0), Some(50.0));
        assert_eq!(metric_score(5.0, 0.0), None);
    }

    #[test]
    fn zero_benchmark_metric_is_skipped() {
        let mut b = catalogue()[0];
        b.adj_ratio = 0.0;
        let mut p = profile_like(&b);
        p.adj_ratio = 40.0;
        let c = compare(&p, &b);
        assert!((c.similarity_score - 100.0).abs() < 1e-9);
        let adj = c
            .individual_scores
            .iter()
            .find(|s| s.metric == Metric::Adjective)
            .unwrap();
        assert_eq!(adj.score, None);
    }

    #[test]
    fn complexity_is_reported_but_not_averaged() {
        let b = catalogue()[0];
        let mut p = profile_like(&b);
        p.complexity_ratio = 0.0;
        let c = compare(&p, &b);
        assert!((c.similarity_score - 100.0).abs() < 1e-9);
        assert_eq!(c.individual_scores[5].score, Some(0.0));
    }

    #[test]
    fn best_match_is_the_closest_style() {
        let target = &catalogue()[2];
        let (comparisons, best) = compare_all(&profile_like(target), catalogue()).unwrap();
        assert_eq!(comparisons[best].benchmark, "creative-writing");
    }

    fn reference() -> BenchmarkProfile {
        catalogue()[0]
    }

    #[test]
    fn matching_the_reference_needs_no_fixes() {
        let hp = Hyperparameters::DEFAULT;
        let p = profile_like(&reference());
        let suggestions = improvement_suggestions(&p, &reference(), &hp);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].area, AdviceArea::Overall);
        assert_eq!(suggestions[0].priority, Priority::Low);
        // 12.5 words per sentence is inside 8..=15, so all six strengths hold.
        assert_eq!(writing_strengths(&p, &reference(), &hp).len(), 6);
        assert_eq!(
            growth_areas(&p, &reference(), &hp),
            vec!["Keep the current level and focus on creativity"]
        );
    }

    #[test]
    fn suggestions_follow_signed_gaps() {
        let hp = Hyperparameters::DEFAULT;
        let r = reference();
        let p = TextProfile {
            noun_ratio: r.noun_ratio + 9.0,
            verb_ratio: r.verb_ratio - 6.0,
            adj_ratio: r.adj_ratio + 9.0,
            complexity_ratio: r.complexity_ratio - 16.0,
            ..profile_like(&r)
        };
        let got: Vec<(AdviceArea, Priority)> = improvement_suggestions(&p, &r, &hp)
            .iter()
            .map(|s| (s.area, s.priority))
            .collect();
        assert_eq!(
            got,
            vec![
                (AdviceArea::NounUsage, Priority::High),
                (AdviceArea::VerbUsage, Priority::High),
                (AdviceArea::AdjectiveUsage, Priority::Low),
                (AdviceArea::SentenceStructure, Priority::Medium),
            ]
        );

        // Just inside every threshold.
        let near = TextProfile {
            noun_ratio: r.noun_ratio - 7.5,
            adj_ratio: r.adj_ratio - 2.5,
            vocabulary_diversity: r.vocabulary_diversity - 0.05,
            complexity_ratio: r.complexity_ratio + 19.5,
            ..profile_like(&r)
        };
        assert_eq!(
            improvement_suggestions(&near, &r, &hp)[0].area,
            AdviceArea::Overall
        );
    }

    #[test]
    fn growth_areas_rank_widest_gap_first_and_cap_at_three() {
        let hp = Hyperparameters::DEFAULT;
        let r = reference();
        let p = TextProfile {
            noun_ratio: r.noun_ratio + 10.0,
            verb_ratio: r.verb_ratio - 6.0,
            adj_ratio: r.adj_ratio + 7.0,
            vocabulary_diversity: r.vocabulary_diversity - 0.3,
            complexity_ratio: r.complexity_ratio - 40.0,
            ..profile_like(&r)
        };
        assert_eq!(
            growth_areas(&p, &r, &hp),
            vec![
                "Improve sentence structure",
                "Increase vocabulary diversity",
                "Balance noun use",
            ]
        );
    }

    #[test]
    fn far_profile_has_only_the_fallback_strength() {
        let hp = Hyperparameters::DEFAULT;
        let p = TextProfile {
            avg_sentence_length: 30.0,
            ..TextProfile::default()
        };
        assert_eq!(
            writing_strengths(&p, &reference(), &hp),
            vec!["Steady practice is building your skills"]
        );
    }

    #[test]
    fn report_carries_advice() {
        let p = profile_like(&reference());
        let r = report(p, Vec::new(), catalogue(), &Hyperparameters::DEFAULT).unwrap();
        assert_eq!(r.best_match, "middle-school-excellent");
        assert!(!r.improvement_suggestions.is_empty());
        assert!(!r.writing_strengths.is_empty());
        assert!(!r.growth_areas.is_empty());
    }

    #[test]
    fn malformed_catalogue_is_rejected() {
        assert_eq!(validate(&[]), Err(ComponentError::EmptyCatalogue));
        let mut b = catalogue()[0];
        b.noun_ratio = f64::NAN;
        assert!(matches!(
            compare_all(&TextProfile::default(), &[b]),
            Err(ComponentError::InvalidBenchmark { .. })
        ));
    }
}
