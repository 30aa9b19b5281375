//! Weighted composite score, strengths and weaknesses, and the improvement
//! roadmap.

use serde::Serialize;

use crate::hyperparams::Hyperparameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Statistical,
    Vocabulary,
    Grammar,
    Coherence,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Statistical,
        Dimension::Vocabulary,
        Dimension::Grammar,
        Dimension::Coherence,
    ];

    fn strength(self) -> &'static str {
        match self {
            Dimension::Statistical => "Statistical writing patterns are strong",
            Dimension::Vocabulary => "Vocabulary is rich and varied",
            Dimension::Grammar => "Grammar is accurate",
            Dimension::Coherence => "Organisation is logical and consistent",
        }
    }

    fn weakness(self) -> &'static str {
        match self {
            Dimension::Statistical => "Balance parts of speech and sentence construction",
            Dimension::Vocabulary => "Broaden vocabulary and use more advanced expressions",
            Dimension::Grammar => "Reduce the number of grammar errors",
            Dimension::Coherence => "Strengthen links and logical flow between sentences",
        }
    }

    fn action(self) -> ImmediateAction {
        let (action, description) = match self {
            Dimension::Statistical => (
                "Adjust sentence length",
                "Split long sentences and join very short ones",
            ),
            Dimension::Vocabulary => (
                "Study advanced vocabulary",
                "Learn three new words a day and use them in your writing",
            ),
            Dimension::Grammar => (
                "Review grammar basics",
                "Go through the flagged sentences and correct each issue",
            ),
            Dimension::Coherence => (
                "Use logical connectors",
                "Link sentences with words such as therefore, however and because",
            ),
        };
        ImmediateAction {
            dimension: self,
            action,
            description,
            priority: Priority::High,
        }
    }
}

/// Component scores in `[0, 100]`. `None` marks a dimension with no usable
/// result; it is left out of the weighted average rather than counted as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComponentScores {
    pub statistical: Option<f64>,
    pub vocabulary: Option<f64>,
    pub grammar: Option<f64>,
    pub coherence: Option<f64>,
}

impl ComponentScores {
    pub fn new(statistical: f64, vocabulary: f64, grammar: f64, coherence: f64) -> Self {
        Self {
            statistical: Some(statistical),
            vocabulary: Some(vocabulary),
            grammar: Some(grammar),
            coherence: Some(coherence),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Statistical => self.statistical,
            Dimension::Vocabulary => self.vocabulary,
            Dimension::Grammar => self.grammar,
            Dimension::Coherence => self.coherence,
        }
    }

    fn rounded(&self) -> Self {
        Self {
            statistical: self.statistical.map(round1),
            vocabulary: self.vocabulary.map(round1),
            grammar: self.grammar.map(round1),
            coherence: self.coherence.map(round1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Excellent,
    Good,
    Average,
    Developing,
}

impl Level {
    pub fn description(self) -> &'static str {
        match self {
            Level::Excellent => "Expert-level writing",
            Level::Good => "Confident, advanced writing",
            Level::Average => "Intermediate writing with room to grow",
            Level::Developing => "Focus on building core writing skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImmediateAction {
    pub dimension: Dimension,
    pub action: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roadmap {
    pub immediate_actions: Vec<ImmediateAction>,
    pub short_term_goals: Vec<&'static str>,
    pub long_term_goals: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeAssessment {
    pub overall_score: f64,
    pub level: Level,
    pub level_description: &'static str,
    pub component_scores: ComponentScores,
    /// Dimensions left out of the average.
    pub excluded_dimensions: Vec<Dimension>,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub roadmap: Roadmap,
}

const SHORT_TERM_GOALS: &[&str] = &[
    "Write one essay a week and practise systematically",
    "Read and analyse strong essays across different genres",
    "Ask for feedback on your writing and apply it",
];

const LONG_TERM_GOALS: &[&str] = &[
    "Develop a personal writing style",
    "Build creative and original expression",
    "Write in depth on complex topics",
];

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[derive(Debug, Clone)]
pub struct CompositeScorer {
    hp: Hyperparameters,
}

impl CompositeScorer {
    pub fn new(hp: &Hyperparameters) -> Self {
        Self { hp: hp.clone() }
    }

    fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Statistical => self.hp.statistical_weight,
            Dimension::Vocabulary => self.hp.vocabulary_weight,
            Dimension::Grammar => self.hp.grammar_weight,
            Dimension::Coherence => self.hp.coherence_weight,
        }
    }

    pub fn level(&self, score: f64) -> Level {
        let hp = &self.hp;
        if score >= hp.level_excellent_min {
            Level::Excellent
        } else if score >= hp.level_good_min {
            Level::Good
        } else if score >= hp.level_average_min {
            Level::Average
        } else {
            Level::Developing
        }
    }

    /// Weighted mean over the dimensions that have a score; weights of the
    /// excluded ones are redistributed proportionally.
    #[tracing::instrument(skip_all)]
    pub fn compose(&self, scores: &ComponentScores) -> CompositeAssessment {
        let hp = &self.hp;
        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        let mut excluded = Vec::new();
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        let mut immediate_actions = Vec::new();

        for dim in Dimension::ALL {
            let Some(score) = scores.get(dim) else {
                excluded.push(dim);
                continue;
            };
            let score = score.clamp(0.0, 100.0);
            weighted += score * self.weight(dim);
            total_weight += self.weight(dim);
            if score >= hp.strength_min {
                strengths.push(dim.strength());
            } else {
                weaknesses.push(dim.weakness());
            }
            if score < hp.immediate_action_below {
                immediate_actions.push(dim.action());
            }
        }

        let overall = if total_weight > 0.0 {
            (weighted / total_weight).clamp(0.0, 100.0)
        } else {
            0.0
        };
        if !excluded.is_empty() {
            tracing::warn!(?excluded, "composite computed without some dimensions");
        }
        tracing::debug!(overall, "composite scored");

        let level = self.level(overall);
        let short_term_goals = if overall < hp.short_term_goal_below {
            SHORT_TERM_GOALS.to_vec()
        } else {
            Vec::new()
        };

        CompositeAssessment {
            overall_score: round1(overall),
            level,
            level_description: level.description(),
            component_scores: scores.rounded(),
            excluded_dimensions: excluded,
            strengths,
            weaknesses,
            roadmap: Roadmap {
                immediate_actions,
                short_term_goals,
                long_term_goals: LONG_TERM_GOALS.to_vec(),
            },
        }
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(&Hyperparameters::DEFAULT)
    }
}

/// Compose four complete scores with the default weights.
pub fn compose(
    statistical: f64,
    vocabulary: f64,
    grammar: f64,
    coherence: f64,
) -> CompositeAssessment {
    CompositeScorer::default().compose(&ComponentScores::new(
        statistical,
        vocabulary,
        grammar,
        coherence,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_weights() {
        let a = compose(100.0, 80.0, 60.0, 40.0);
        assert_eq!(a.overall_score, 70.0);
        assert_eq!(a.level, Level::Good);
        assert!(a.excluded_dimensions.is_empty());
    }

    #[test]
    fn level_thresholds() {
        let scorer = CompositeScorer::default();
        assert_eq!(scorer.level(85.0), Level::Excellent);
        assert_eq!(scorer.level(84.9), Level::Good);
        assert_eq!(scorer.level(70.0), Level::Good);
        assert_eq!(scorer.level(55.0), Level::Average);
        assert_eq!(scorer.level(54.9), Level::Developing);
    }

    #[test]
    fn strengths_and_weaknesses_split_at_70() {
        let a = compose(70.0, 69.9, 90.0, 10.0);
        assert_eq!(a.strengths.len(), 2);
        assert_eq!(a.weaknesses.len(), 2);
        assert!(a.strengths.contains(&Dimension::Grammar.strength()));
        assert!(a.weaknesses.contains(&Dimension::Coherence.weakness()));
    }

    #[test]
    fn roadmap_rules() {
        let a = compose(50.0, 90.0, 90.0, 59.9);
        let dims: Vec<Dimension> = a
            .roadmap
            .immediate_actions
            .iter()
            .map(|x| x.dimension)
            .collect();
        assert_eq!(dims, vec![Dimension::Statistical, Dimension::Coherence]);
        // Overall 72.5: no short-term goals.
        assert!(a.roadmap.short_term_goals.is_empty());
        assert_eq!(a.roadmap.long_term_goals.len(), 3);

        let weak = compose(10.0, 10.0, 10.0, 10.0);
        assert_eq!(weak.roadmap.immediate_actions.len(), 4);
        assert_eq!(weak.roadmap.short_term_goals.len(), 3);
        let strong = compose(100.0, 100.0, 100.0, 100.0);
        assert_eq!(weak.roadmap.long_term_goals, strong.roadmap.long_term_goals);
    }

    #[test]
    fn missing_dimension_is_excluded_not_zeroed() {
        let scores = ComponentScores {
            grammar: None,
            ..ComponentScores::new(60.0, 60.0, 0.0, 90.0)
        };
        let a = CompositeScorer::default().compose(&scores);
        assert_eq!(a.overall_score, 70.0);
        assert_eq!(a.excluded_dimensions, vec![Dimension::Grammar]);
        assert_eq!(a.strengths.len() + a.weaknesses.len(), 3);
    }

    #[test]
    fn nothing_to_score() {
        let a = CompositeScorer::default().compose(&ComponentScores::default());
        assert_eq!(a.overall_score, 0.0);
        assert_eq!(a.level, Level::Developing);
        assert_eq!(a.excluded_dimensions.len(), 4);
    }
}
