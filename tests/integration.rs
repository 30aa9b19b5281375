use essay_grader::primitives::TaggedToken;
use essay_grader::{
    analyze, AnalysisMode, Analyzer, Capabilities, Dimension, HeuristicPrimitives, IssueKind,
    LinguisticPrimitives, NoPrimitives, PrimitiveError, Slot, VocabularyLevel,
};

const ESSAY: &str = "My school has a small garden. Every spring the students plant flowers \
                     and vegetables there. However, the garden needs water every day, so we \
                     take turns. I think the garden teaches us patience because plants grow \
                     slowly. Furthermore, it gives our school a beautiful place to relax.";

fn grammar_kinds(text: &str) -> Vec<IssueKind> {
    let report = analyze(text);
    let grammar = report.grammar.result().expect("grammar should run");
    grammar.issues.iter().map(|i| i.kind).collect()
}

#[test]
fn he_are_is_one_agreement_issue() {
    let report = analyze("He are happy.");
    let grammar = report.grammar.result().unwrap();
    assert_eq!(grammar.issues.len(), 1);
    let issue = &grammar.issues[0];
    assert_eq!(issue.kind, IssueKind::SubjectVerbAgreement);
    assert_eq!(issue.matched.as_deref(), Some("he are"));
    assert!(issue.description.contains("\"he\""));
}

#[test]
fn repeated_sentence_is_clean_and_coherent() {
    let report = analyze("I am happy. I am very happy today.");
    let grammar = report.grammar.result().unwrap();
    assert!(grammar.issues.is_empty(), "unexpected issues: {:?}", grammar.issues);
    assert_eq!(grammar.grammar_score, 100.0);

    let coherence = report.coherence.result().unwrap();
    // {i, am, happy} against {i, am, very, happy, today}.
    assert!((coherence.average_similarity - 0.6).abs() < 1e-9);
    assert!(
        coherence.coherence_score > 20.0,
        "overlap should lift coherence above the floor, got {}",
        coherence.coherence_score
    );
}

#[test]
fn thirty_word_sentence_is_too_long() {
    let text = "The students in our school read many books and they write long essays about \
                science history music art and sport every week because they want to improve \
                their writing skills";
    assert_eq!(text.split_whitespace().count(), 30);
    assert_eq!(grammar_kinds(text), vec![IssueKind::SentenceLength]);
}

#[test]
fn catalogue_vocabulary_levels_advanced() {
    let text = "Furthermore analyze evaluate demonstrate significant. Consequently illustrate \
                substantial comprehensive fundamental. Moreover establish investigate examine \
                crucial.";
    let report = analyze(text);
    let vocabulary = report.vocabulary.result().unwrap();
    assert!(vocabulary.profile.advanced_vocabulary_ratio > 20.0);
    assert_eq!(vocabulary.level, VocabularyLevel::Advanced);
}

#[test]
fn empty_input_produces_a_report() {
    for text in ["", "   \n\t "] {
        let report = analyze(text);
        let statistical = report.statistical.result().unwrap();
        assert_eq!(statistical.profile.total_words, 0);
        assert_eq!(statistical.profile.total_sentences, 0);
        assert_eq!(report.grammar.result().unwrap().grammar_score, 100.0);
        assert_eq!(report.coherence.result().unwrap().coherence_score, 20.0);
        // Nothing was checked, so grammar does not vouch for the text.
        assert!(report
            .assessment
            .excluded_dimensions
            .contains(&Dimension::Grammar));
        assert!((0.0..=100.0).contains(&report.assessment.overall_score));
    }
}

#[test]
fn report_is_valid_json() {
    let report = analyze(ESSAY);
    let json = serde_json::to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["mode"], "full");
    assert_eq!(parsed["grammar"]["status"], "complete");
    assert!(parsed["assessment"]["overall_score"].is_number());
    assert!(parsed["statistical"]["result"]["best_match"].is_string());
    assert_eq!(
        parsed["assessment"]["roadmap"]["long_term_goals"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn identical_input_gives_identical_output() {
    let a = serde_json::to_string(&analyze(ESSAY)).unwrap();
    let b = serde_json::to_string(&analyze(ESSAY)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_score_is_bounded() {
    let report = analyze(ESSAY);
    let scores = report.assessment.component_scores;
    for dim in Dimension::ALL {
        let score = scores.get(dim).unwrap();
        assert!((0.0..=100.0).contains(&score), "{dim:?} = {score}");
    }
    assert!((0.0..=100.0).contains(&report.assessment.overall_score));
}

#[test]
fn no_primitives_runs_naive_mode() {
    let analyzer = Analyzer::new(NoPrimitives);
    let report = analyzer.analyze(ESSAY);
    assert_eq!(report.mode, AnalysisMode::Naive);
    assert!(report.statistical.is_degraded());
    assert!(report.vocabulary.is_degraded());
    assert!(report.coherence.is_degraded());
    assert!(report.grammar.is_missing());

    let naive = report.statistical.result().unwrap();
    assert!(naive.profile.total_words > 0);
    assert_eq!(
        report.assessment.excluded_dimensions,
        vec![Dimension::Grammar]
    );
}

/// Advertises everything but fails whichever capability it is told to.
struct Flaky {
    fail_tagging: bool,
    fail_segmentation: bool,
}

impl LinguisticPrimitives for Flaky {
    fn capabilities(&self) -> Capabilities {
        Capabilities::ALL
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, PrimitiveError> {
        if self.fail_segmentation {
            return Err(PrimitiveError::failed("segment_sentences", "model not loaded"));
        }
        HeuristicPrimitives::new().segment_sentences(text)
    }

    fn tokenize_words(&self, text: &str) -> Result<Vec<String>, PrimitiveError> {
        HeuristicPrimitives::new().tokenize_words(text)
    }

    fn tag_pos(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, PrimitiveError> {
        if self.fail_tagging {
            return Err(PrimitiveError::failed("tag_pos", "tagger crashed"));
        }
        HeuristicPrimitives::new().tag_pos(tokens)
    }
}

#[test]
fn tagger_failure_only_removes_grammar() {
    let analyzer = Analyzer::new(Flaky {
        fail_tagging: true,
        fail_segmentation: false,
    });
    let report = analyzer.analyze(ESSAY);
    assert_eq!(report.mode, AnalysisMode::Full);
    match &report.grammar {
        Slot::Missing { error } => assert!(error.contains("tagger crashed")),
        other => panic!("expected missing grammar, got {other:?}"),
    }
    assert!(matches!(report.statistical, Slot::Complete { .. }));
    assert!(matches!(report.coherence, Slot::Complete { .. }));
    assert!(!report.caveats.is_empty());
}

#[test]
fn segmentation_failure_falls_back_to_naive() {
    let analyzer = Analyzer::new(Flaky {
        fail_tagging: false,
        fail_segmentation: true,
    });
    let report = analyzer.analyze(ESSAY);
    assert_eq!(report.mode, AnalysisMode::Naive);
    assert!(report.caveats[0].contains("model not loaded"));
    assert!(report.statistical.is_degraded());
}

/// Splits and tokenizes but has no tagger.
struct Untagged;

impl LinguisticPrimitives for Untagged {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            tagging: false,
            ..Capabilities::ALL
        }
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, PrimitiveError> {
        HeuristicPrimitives::new().segment_sentences(text)
    }

    fn tokenize_words(&self, text: &str) -> Result<Vec<String>, PrimitiveError> {
        HeuristicPrimitives::new().tokenize_words(text)
    }

    fn tag_pos(&self, _tokens: &[String]) -> Result<Vec<TaggedToken>, PrimitiveError> {
        Err(PrimitiveError::Unavailable {
            capability: "tagging",
        })
    }
}

#[test]
fn untagged_backend_skips_only_grammar() {
    let analyzer = Analyzer::new(Untagged);
    assert_eq!(analyzer.mode(), AnalysisMode::Untagged);
    let report = analyzer.analyze(ESSAY);
    assert_eq!(report.mode, AnalysisMode::Untagged);
    assert!(report.grammar.is_missing());
    assert!(matches!(report.statistical, Slot::Complete { .. }));
    assert!(matches!(report.vocabulary, Slot::Complete { .. }));
    assert!(matches!(report.coherence, Slot::Complete { .. }));
    assert_eq!(
        report.assessment.excluded_dimensions,
        vec![Dimension::Grammar]
    );
}

#[test]
fn contractions_do_not_count_as_shared_words() {
    let report = analyze("I don't know. I don't care.");
    let coherence = report.coherence.result().unwrap();
    // {i, know} against {i, care}.
    assert!((coherence.average_similarity - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn mixed_tense_with_adjective_listed_past_form() {
    assert_eq!(
        grammar_kinds("She finished her homework and is tired."),
        vec![IssueKind::TenseConsistency]
    );
}

#[test]
fn statistical_report_carries_benchmark_advice() {
    let report = analyze(ESSAY);
    let statistical = report.statistical.result().unwrap();
    assert!(!statistical.improvement_suggestions.is_empty());
    assert!(!statistical.writing_strengths.is_empty());
    assert!((1..=3).contains(&statistical.growth_areas.len()));
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["statistical"]["result"]["improvement_suggestions"][0]["type"].is_string());
    assert!(json["vocabulary"]["result"]["insights"].is_array());
}

#[test]
fn broken_benchmark_catalogue_is_contained() {
    let analyzer = Analyzer::default().with_benchmarks(Vec::new());
    let report = analyzer.analyze(ESSAY);
    assert!(report.statistical.is_missing());
    assert!(report.vocabulary.result().is_some());
    assert!(report
        .assessment
        .excluded_dimensions
        .contains(&Dimension::Statistical));
}

#[test]
fn tuned_constants_change_scores() {
    let mut hp = essay_grader::Hyperparameters::default();
    hp.grammar_issue_penalty = 50.0;
    let strict = Analyzer::default().with_hyperparameters(hp);
    let report = strict.analyze("He are happy.");
    assert_eq!(report.grammar.result().unwrap().grammar_score, 50.0);
    assert_eq!(
        analyze("He are happy.").grammar.result().unwrap().grammar_score,
        80.0
    );
}
