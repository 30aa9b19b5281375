//! The analysis pipeline: tokenize once, run the four analyses in parallel,
//! then compose.

use serde::Serialize;

use crate::benchmark::{self, BenchmarkProfile, StatisticalReport};
use crate::coherence::{CoherenceAnalyzer, CoherenceReport};
use crate::composite::{ComponentScores, CompositeAssessment, CompositeScorer};
use crate::error::{ComponentError, PrimitiveError};
use crate::grammar::{GrammarDetector, GrammarReport};
use crate::hyperparams::Hyperparameters;
use crate::primitives::{
    naive_sentences, naive_words, Capabilities, HeuristicPrimitives, LinguisticPrimitives,
    TaggedToken,
};
use crate::profile::StatisticalProfiler;
use crate::vocabulary::{VocabularyLeveler, VocabularyReport};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How much of the primitives backend the pipeline can rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Segmentation, tokenization and tagging.
    Full,
    /// Segmentation and tokenization; grammar checks are unavailable.
    Untagged,
    /// Regex splitting and suffix-only POS.
    Naive,
}

impl AnalysisMode {
    pub fn detect(caps: Capabilities) -> Self {
        match caps {
            Capabilities {
                segmentation: true,
                tokenization: true,
                tagging: true,
            } => AnalysisMode::Full,
            Capabilities {
                segmentation: true,
                tokenization: true,
                tagging: false,
            } => AnalysisMode::Untagged,
            _ => AnalysisMode::Naive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<String>,
    /// Lower-cased alphabetic tokens.
    pub words: Vec<String>,
    /// Empty when no tagger ran.
    pub tags: Vec<TaggedToken>,
}

impl Sentence {
    /// A sentence tokenized with the regex fallback and left untagged.
    pub fn naive(text: &str) -> Self {
        let words = naive_words(text);
        Self {
            text: text.to_string(),
            tokens: words.clone(),
            words,
            tags: Vec::new(),
        }
    }
}

/// Tokenized input shared read-only by every analysis.
#[derive(Debug, Clone)]
pub struct Document {
    pub sentences: Vec<Sentence>,
    pub words: Vec<String>,
    /// Effective mode. Lower than the analyzer's when a primitive failed.
    pub mode: AnalysisMode,
    pub caveats: Vec<String>,
    /// Why tags are absent, if they are.
    pub tag_error: Option<PrimitiveError>,
}

/// One component's outcome. `Missing` is never read as a zero score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Slot<T> {
    Complete { result: T },
    Degraded { result: T, caveat: String },
    Missing { error: String },
}

impl<T> Slot<T> {
    pub fn result(&self) -> Option<&T> {
        match self {
            Slot::Complete { result } | Slot::Degraded { result, .. } => Some(result),
            Slot::Missing { .. } => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Slot::Missing { .. })
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Slot::Degraded { .. })
    }

    fn from_result(result: Result<T, ComponentError>, caveat: Option<&str>) -> Self {
        match (result, caveat) {
            (Ok(result), None) => Slot::Complete { result },
            (Ok(result), Some(caveat)) => Slot::Degraded {
                result,
                caveat: caveat.to_string(),
            },
            (Err(e), _) => Slot::Missing {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub mode: AnalysisMode,
    pub capabilities: Capabilities,
    pub caveats: Vec<String>,
    pub statistical: Slot<StatisticalReport>,
    pub vocabulary: Slot<VocabularyReport>,
    pub grammar: Slot<GrammarReport>,
    pub coherence: Slot<CoherenceReport>,
    pub assessment: CompositeAssessment,
}

const NAIVE_CAVEAT: &str = "naive tokenization; values are approximate";

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Holds the primitives backend and every component, built once and reused
/// across calls. Each call is a pure function of its input text.
pub struct Analyzer {
    primitives: Box<dyn LinguisticPrimitives>,
    capabilities: Capabilities,
    mode: AnalysisMode,
    hp: Hyperparameters,
    benchmarks: Vec<BenchmarkProfile>,
    profiler: StatisticalProfiler,
    leveler: VocabularyLeveler,
    grammar: GrammarDetector,
    coherence: CoherenceAnalyzer,
    scorer: CompositeScorer,
}

impl Analyzer {
    pub fn new(primitives: impl LinguisticPrimitives + 'static) -> Self {
        let capabilities = primitives.capabilities();
        let mode = AnalysisMode::detect(capabilities);
        if mode != AnalysisMode::Full {
            tracing::warn!(?capabilities, ?mode, "primitives backend is limited");
        }
        let hp = Hyperparameters::DEFAULT;
        Self {
            primitives: Box::new(primitives),
            capabilities,
            mode,
            benchmarks: benchmark::catalogue().to_vec(),
            profiler: StatisticalProfiler::new(&hp),
            leveler: VocabularyLeveler::new(&hp),
            grammar: GrammarDetector::new(&hp),
            coherence: CoherenceAnalyzer::new(&hp),
            scorer: CompositeScorer::new(&hp),
            hp,
        }
    }

    /// The built-in backend and every component tuned with `hp`.
    pub fn heuristic(hp: Hyperparameters) -> Self {
        Self::new(HeuristicPrimitives::with_hyperparameters(&hp)).with_hyperparameters(hp)
    }

    /// Retune the analysis components. The primitives backend keeps its own
    /// constants; use [`Analyzer::heuristic`] to tune the built-in tagger too.
    pub fn with_hyperparameters(mut self, hp: Hyperparameters) -> Self {
        self.profiler = StatisticalProfiler::new(&hp);
        self.leveler = VocabularyLeveler::new(&hp);
        self.grammar = GrammarDetector::new(&hp);
        self.coherence = CoherenceAnalyzer::new(&hp);
        self.scorer = CompositeScorer::new(&hp);
        self.hp = hp;
        self
    }

    pub fn with_benchmarks(mut self, benchmarks: Vec<BenchmarkProfile>) -> Self {
        self.benchmarks = benchmarks;
        self
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hp
    }

    /// Split and tag `text`. Any primitive failure degrades the document
    /// instead of aborting.
    #[tracing::instrument(skip_all, fields(mode = ?self.mode))]
    pub fn prepare(&self, text: &str) -> Document {
        if self.mode == AnalysisMode::Naive {
            return naive_document(
                text,
                Vec::new(),
                PrimitiveError::Unavailable {
                    capability: "tagging",
                },
            );
        }

        let mut sentences = match self.tokenize(text) {
            Ok(sentences) => sentences,
            Err(e) => {
                tracing::warn!(error = %e, "primitives failed, falling back to naive tokenization");
                let caveat = format!("{e}; fell back to naive tokenization");
                return naive_document(text, vec![caveat], e);
            }
        };

        let tag_error = if self.mode == AnalysisMode::Full {
            self.tag(&mut sentences).err()
        } else {
            Some(PrimitiveError::Unavailable {
                capability: "tagging",
            })
        };
        let mut caveats = Vec::new();
        if let Some(e) = &tag_error {
            if self.mode == AnalysisMode::Full {
                tracing::warn!(error = %e, "tagging failed");
            }
            caveats.push(format!("{e}; grammar checks skipped"));
        }

        let words = sentences
            .iter()
            .flat_map(|s| s.words.iter().cloned())
            .collect();
        Document {
            sentences,
            words,
            mode: self.mode,
            caveats,
            tag_error,
        }
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Sentence>, PrimitiveError> {
        self.primitives
            .segment_sentences(text)?
            .into_iter()
            .map(|text| {
                let tokens = self.primitives.tokenize_words(&text)?;
                let words = tokens
                    .iter()
                    .filter(|t| is_word(t))
                    .map(|t| t.to_lowercase())
                    .collect();
                Ok(Sentence {
                    text,
                    tokens,
                    words,
                    tags: Vec::new(),
                })
            })
            .collect()
    }

    fn tag(&self, sentences: &mut [Sentence]) -> Result<(), PrimitiveError> {
        let mut tagged = Vec::with_capacity(sentences.len());
        for s in sentences.iter() {
            tagged.push(self.primitives.tag_pos(&s.tokens)?);
        }
        for (s, tags) in sentences.iter_mut().zip(tagged) {
            s.tags = tags;
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(chars = text.len()))]
    pub fn analyze(&self, text: &str) -> AssessmentReport {
        let doc = self.prepare(text);
        let ((statistical, vocabulary), (grammar, coherence)) = rayon::join(
            || {
                rayon::join(
                    || self.statistical(&doc),
                    || self.vocabulary(&doc),
                )
            },
            || rayon::join(|| self.grammar(&doc), || self.coherence(&doc)),
        );

        let scores = ComponentScores {
            statistical: statistical.result().map(|r| r.statistical_score),
            vocabulary: vocabulary.result().map(|r| r.sophistication_score),
            // No sentences means nothing was checked; leave grammar out of
            // the average instead of crediting a perfect score.
            grammar: grammar
                .result()
                .filter(|r| r.total_sentences > 0)
                .map(|r| r.grammar_score),
            coherence: coherence.result().map(|r| r.coherence_score),
        };
        let assessment = self.scorer.compose(&scores);

        AssessmentReport {
            mode: doc.mode,
            capabilities: self.capabilities,
            caveats: doc.caveats,
            statistical,
            vocabulary,
            grammar,
            coherence,
            assessment,
        }
    }

    fn caveat(doc: &Document) -> Option<&'static str> {
        (doc.mode == AnalysisMode::Naive).then_some(NAIVE_CAVEAT)
    }

    fn statistical(&self, doc: &Document) -> Slot<StatisticalReport> {
        let profile = self.profiler.profile_document(doc);
        let insights = self.profiler.insights(&profile);
        let result = benchmark::report(profile, insights, &self.benchmarks, &self.hp);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "statistical analysis failed");
        }
        Slot::from_result(result, Self::caveat(doc))
    }

    fn vocabulary(&self, doc: &Document) -> Slot<VocabularyReport> {
        Slot::from_result(Ok(self.leveler.analyze(&doc.words)), Self::caveat(doc))
    }

    fn grammar(&self, doc: &Document) -> Slot<GrammarReport> {
        let result = match &doc.tag_error {
            Some(e) => Err(ComponentError::from(e.clone())),
            None => Ok(self.grammar.analyze(&doc.sentences)),
        };
        Slot::from_result(result, None)
    }

    fn coherence(&self, doc: &Document) -> Slot<CoherenceReport> {
        Slot::from_result(Ok(self.coherence.analyze(&doc.sentences)), Self::caveat(doc))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(HeuristicPrimitives::new())
    }
}

fn is_word(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphabetic)
        && token
            .chars()
            .all(|c| c.is_alphabetic() || c == '\'' || c == '\u{2019}')
}

fn naive_document(text: &str, caveats: Vec<String>, tag_error: PrimitiveError) -> Document {
    let sentences: Vec<Sentence> = naive_sentences(text)
        .iter()
        .map(|s| Sentence::naive(s))
        .collect();
    let words = sentences
        .iter()
        .flat_map(|s| s.words.iter().cloned())
        .collect();
    Document {
        sentences,
        words,
        mode: AnalysisMode::Naive,
        caveats,
        tag_error: Some(tag_error),
    }
}
