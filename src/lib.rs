//! Automated writing-quality assessment for student English prose.
//!
//! [`analyze`] runs the whole pipeline with the built-in heuristic
//! primitives. Build an [`Analyzer`] to plug in another
//! [`LinguisticPrimitives`] backend or tuned [`Hyperparameters`].

pub mod benchmark;
pub mod coherence;
pub mod composite;
pub mod error;
pub mod grammar;
pub mod hyperparams;
mod lexicon;
pub mod pipeline;
pub mod pos;
pub mod primitives;
pub mod profile;
pub mod rules;
pub mod vocabulary;

use once_cell::sync::Lazy;

pub use benchmark::{
    AdviceArea, BenchmarkComparison, BenchmarkProfile, StatisticalReport, Suggestion,
};
pub use coherence::{CoherenceReport, FlowLevel};
pub use composite::{
    ComponentScores, CompositeAssessment, Dimension, Level, Priority, Roadmap,
};
pub use error::{ComponentError, PrimitiveError};
pub use grammar::{GrammarIssue, GrammarReport, IssueKind};
pub use hyperparams::Hyperparameters;
pub use pipeline::{AnalysisMode, Analyzer, AssessmentReport, Document, Sentence, Slot};
pub use pos::PosTag;
pub use primitives::{
    Capabilities, HeuristicPrimitives, LinguisticPrimitives, MorphTag, NoPrimitives,
};
pub use profile::TextProfile;
pub use vocabulary::{VocabularyLevel, VocabularyReport, VocabularyTier};

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::default);

/// Assess `text` with the default primitives and constants.
pub fn analyze(text: &str) -> AssessmentReport {
    DEFAULT_ANALYZER.analyze(text)
}
