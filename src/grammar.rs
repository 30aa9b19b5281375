//! Pattern-based grammar checks run independently over every sentence.
//!
//! Each check is a heuristic, not a parse: regex tables over the raw
//! sentence for agreement, article and preposition slips, plus tag-based
//! checks for mixed tense and missing subject or verb.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::hyperparams::Hyperparameters;
use crate::pipeline::Sentence;
use crate::primitives::TaggedToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    SubjectVerbAgreement,
    TenseConsistency,
    ArticleUsage,
    PrepositionUsage,
    SentenceStructure,
    SentenceLength,
}

impl IssueKind {
    fn improvement_area(self) -> &'static str {
        match self {
            IssueKind::SubjectVerbAgreement => "Practise subject-verb agreement",
            IssueKind::TenseConsistency => "Keep verb tense consistent within a sentence",
            IssueKind::ArticleUsage => "Review when to use a, an and the",
            IssueKind::PrepositionUsage => "Practise common preposition patterns",
            IssueKind::SentenceStructure => "Make sure every sentence has a subject and a verb",
            IssueKind::SentenceLength => "Vary sentence length to keep it readable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub sentence: String,
    pub description: String,
    pub suggestion: String,
    /// Text the pattern matched, lower-cased, when the check is a pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceIssues {
    /// 1-based position in the document.
    pub sentence_number: usize,
    pub sentence: String,
    pub kinds: Vec<IssueKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarReport {
    pub total_sentences: usize,
    pub total_issues: usize,
    pub grammar_score: f64,
    pub issues: Vec<GrammarIssue>,
    pub sentences_with_issues: Vec<SentenceIssues>,
    pub error_count_by_type: BTreeMap<IssueKind, usize>,
    pub improvement_areas: Vec<String>,
}

// ---------------------------------------------------------------------------
// Pattern tables
// ---------------------------------------------------------------------------

struct PatternRule {
    re: Regex,
    description: &'static str,
    /// Replacement applied to the matched text to build the correction.
    correction: &'static str,
}

fn pattern(re: &str, description: &'static str, correction: &'static str) -> PatternRule {
    PatternRule {
        re: Regex::new(re).expect("valid grammar pattern"),
        description,
        correction,
    }
}

static AGREEMENT_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        pattern(r"(?i)\bi are\b", "\"I\" takes \"am\", not \"are\"", "I am"),
        pattern(
            r"(?i)\b(he|she) are\b",
            "\"he\" and \"she\" take \"is\", not \"are\"",
            "$1 is",
        ),
        pattern(r"(?i)\bthey is\b", "\"they\" takes \"are\", not \"is\"", "they are"),
        pattern(r"(?i)\bwe was\b", "\"we\" takes \"were\", not \"was\"", "we were"),
    ]
});

static PREPOSITION_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        pattern(
            r"(?i)\bin the morning\b.*\bin the afternoon\b",
            "Check the time prepositions in this sentence",
            "$0",
        ),
        pattern(r"(?i)\bgo to home\b", "\"go home\" is correct; drop \"to\"", "go home"),
        pattern(
            r"(?i)\blisten music\b",
            "\"listen to music\" is correct",
            "listen to music",
        ),
    ]
});

static ARTICLE_EXEMPT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:go to school|at home|in bed)\b").expect("valid article exemption regex")
});
static BARE_NOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-z]+ (?:cat|dog|book|house|car)\b").expect("valid bare noun regex")
});
static ARTICLE_NOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:a|an|the) (?:cat|dog|book|house|car)\b").expect("valid article regex")
});

// ---------------------------------------------------------------------------
// Detector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GrammarDetector {
    hp: Hyperparameters,
}

impl GrammarDetector {
    pub fn new(hp: &Hyperparameters) -> Self {
        Self { hp: hp.clone() }
    }

    /// Run every check over one sentence. No check short-circuits another.
    pub fn detect(&self, sentence: &str, tagged: &[TaggedToken]) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();
        check_agreement(sentence, &mut issues);
        check_tense(sentence, tagged, &mut issues);
        check_articles(sentence, &mut issues);
        check_prepositions(sentence, &mut issues);
        self.check_structure(sentence, tagged, &mut issues);
        issues
    }

    #[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
    pub fn analyze(&self, sentences: &[Sentence]) -> GrammarReport {
        let mut issues = Vec::new();
        let mut sentences_with_issues = Vec::new();
        for (i, s) in sentences.iter().enumerate() {
            let found = self.detect(&s.text, &s.tags);
            if !found.is_empty() {
                sentences_with_issues.push(SentenceIssues {
                    sentence_number: i + 1,
                    sentence: s.text.clone(),
                    kinds: found.iter().map(|f| f.kind).collect(),
                });
            }
            issues.extend(found);
        }

        let mut error_count_by_type = BTreeMap::new();
        for issue in &issues {
            *error_count_by_type.entry(issue.kind).or_insert(0) += 1;
        }

        let total_sentences = sentences.len();
        let grammar_score = if total_sentences == 0 {
            100.0
        } else {
            let rate = issues.len() as f64 / total_sentences as f64;
            (100.0 - rate * self.hp.grammar_issue_penalty).max(0.0)
        };
        tracing::debug!(issues = issues.len(), grammar_score, "grammar checked");

        GrammarReport {
            total_sentences,
            total_issues: issues.len(),
            grammar_score,
            improvement_areas: self.improvement_areas(&error_count_by_type),
            issues,
            sentences_with_issues,
            error_count_by_type,
        }
    }

    /// Most frequent issue kinds first; equal counts keep declaration order.
    fn improvement_areas(&self, counts: &BTreeMap<IssueKind, usize>) -> Vec<String> {
        if counts.is_empty() {
            return vec!["Grammar use is strong".to_string()];
        }
        let mut ranked: Vec<(IssueKind, usize)> = counts.iter().map(|(k, n)| (*k, *n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(self.hp.improvement_area_cap)
            .map(|(kind, _)| kind.improvement_area().to_string())
            .collect()
    }

    fn check_structure(&self, sentence: &str, tagged: &[TaggedToken], out: &mut Vec<GrammarIssue>) {
        let word_count = tagged.iter().filter(|(_, t)| !t.is_punctuation()).count();
        if word_count > self.hp.long_sentence_words {
            out.push(issue(
                IssueKind::SentenceLength,
                sentence,
                format!("Sentence is too long ({word_count} words) and may be hard to follow"),
                "Split it into shorter sentences".to_string(),
            ));
        } else if word_count < self.hp.short_sentence_words {
            out.push(issue(
                IssueKind::SentenceLength,
                sentence,
                format!("Sentence is too short ({word_count} words)"),
                "Add more detail".to_string(),
            ));
        }

        if !tagged.iter().any(|(_, t)| t.is_nominal()) {
            out.push(issue(
                IssueKind::SentenceStructure,
                sentence,
                "Sentence seems to be missing a subject".to_string(),
                "Make the subject of the sentence explicit".to_string(),
            ));
        }
        if !tagged.iter().any(|(_, t)| t.is_verb()) {
            out.push(issue(
                IssueKind::SentenceStructure,
                sentence,
                "Sentence seems to be missing a verb".to_string(),
                "Add a main verb".to_string(),
            ));
        }
    }
}

impl Default for GrammarDetector {
    fn default() -> Self {
        Self::new(&Hyperparameters::DEFAULT)
    }
}

fn issue(kind: IssueKind, sentence: &str, description: String, suggestion: String) -> GrammarIssue {
    GrammarIssue {
        kind,
        sentence: sentence.to_string(),
        description,
        suggestion,
        matched: None,
    }
}

fn check_agreement(sentence: &str, out: &mut Vec<GrammarIssue>) {
    for rule in AGREEMENT_RULES.iter() {
        for m in rule.re.find_iter(sentence) {
            let matched = m.as_str().to_lowercase();
            let corrected = rule.re.replace(&matched, rule.correction);
            out.push(GrammarIssue {
                matched: Some(matched.clone()),
                ..issue(
                    IssueKind::SubjectVerbAgreement,
                    sentence,
                    rule.description.to_string(),
                    format!("Write \"{corrected}\" instead of \"{matched}\""),
                )
            });
        }
    }
}

fn check_tense(sentence: &str, tagged: &[TaggedToken], out: &mut Vec<GrammarIssue>) {
    let past = tagged.iter().any(|(_, t)| t.is_past());
    let present = tagged.iter().any(|(_, t)| t.is_present());
    if past && present {
        out.push(issue(
            IssueKind::TenseConsistency,
            sentence,
            "Past and present tense verbs are mixed in one sentence".to_string(),
            "Keep the whole sentence in one tense".to_string(),
        ));
    }
}

fn check_articles(sentence: &str, out: &mut Vec<GrammarIssue>) {
    let lower = sentence.to_lowercase();
    if ARTICLE_EXEMPT_RE.is_match(&lower) {
        return;
    }
    if let Some(m) = BARE_NOUN_RE.find(&lower) {
        if !ARTICLE_NOUN_RE.is_match(&lower) {
            out.push(GrammarIssue {
                matched: Some(m.as_str().to_string()),
                ..issue(
                    IssueKind::ArticleUsage,
                    sentence,
                    "A countable noun may need an article".to_string(),
                    "Add a, an or the where it fits".to_string(),
                )
            });
        }
    }
}

fn check_prepositions(sentence: &str, out: &mut Vec<GrammarIssue>) {
    for rule in PREPOSITION_RULES.iter() {
        if let Some(m) = rule.re.find(sentence) {
            let matched = m.as_str().to_lowercase();
            let corrected = rule.re.replace(&matched, rule.correction);
            out.push(GrammarIssue {
                matched: Some(matched.clone()),
                ..issue(
                    IssueKind::PrepositionUsage,
                    sentence,
                    rule.description.to_string(),
                    if corrected == matched {
                        "Check the rules for prepositions of time".to_string()
                    } else {
                        format!("Write \"{corrected}\"")
                    },
                )
            });
        }
    }
}

static DEFAULT_DETECTOR: Lazy<GrammarDetector> = Lazy::new(GrammarDetector::default);

pub fn detect(sentence: &str, tagged: &[TaggedToken]) -> Vec<GrammarIssue> {
    DEFAULT_DETECTOR.detect(sentence, tagged)
}

pub fn analyze(sentences: &[Sentence]) -> GrammarReport {
    DEFAULT_DETECTOR.analyze(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{HeuristicPrimitives, LinguisticPrimitives};

    fn tagged(sentence: &str) -> Vec<TaggedToken> {
        let p = HeuristicPrimitives::new();
        let tokens = p.tokenize_words(sentence).unwrap();
        p.tag_pos(&tokens).unwrap()
    }

    fn kinds(sentence: &str) -> Vec<IssueKind> {
        detect(sentence, &tagged(sentence))
            .into_iter()
            .map(|i| i.kind)
            .collect()
    }

    #[test]
    fn he_are_is_one_agreement_issue() {
        let issues = detect("He are happy.", &tagged("He are happy."));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::SubjectVerbAgreement);
        assert_eq!(issues[0].matched.as_deref(), Some("he are"));
        assert!(issues[0].suggestion.contains("he is"));
    }

    #[test]
    fn every_agreement_match_counts() {
        let s = "They is here and we was there.";
        let agreement = kinds(s)
            .into_iter()
            .filter(|k| *k == IssueKind::SubjectVerbAgreement)
            .count();
        assert_eq!(agreement, 2);
    }

    #[test]
    fn clean_sentence_has_no_issues() {
        assert!(kinds("I am happy.").is_empty());
        assert!(kinds("I am very happy today.").is_empty());
    }

    #[test]
    fn mixed_tense_is_flagged() {
        assert!(kinds("Yesterday she went home and she is tired.")
            .contains(&IssueKind::TenseConsistency));
        assert!(!kinds("Yesterday she went home and she was tired.")
            .contains(&IssueKind::TenseConsistency));
    }

    #[test]
    fn past_tense_listed_as_adjective_still_counts() {
        assert_eq!(
            kinds("She finished her homework and is tired."),
            vec![IssueKind::TenseConsistency]
        );
        assert!(kinds("He is tired.").is_empty());
    }

    #[test]
    fn bare_countable_noun_needs_article() {
        assert!(kinds("I saw big dog.").contains(&IssueKind::ArticleUsage));
        assert!(!kinds("I saw the dog.").contains(&IssueKind::ArticleUsage));
        // Fixed phrases are exempt before the noun check runs.
        assert!(!kinds("My dog stays at home.").contains(&IssueKind::ArticleUsage));
    }

    #[test]
    fn preposition_table() {
        let issues = detect("I go to home.", &tagged("I go to home."));
        let prep: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::PrepositionUsage)
            .collect();
        assert_eq!(prep.len(), 1);
        assert!(prep[0].suggestion.contains("go home"));
        assert!(kinds("We listen music every day.").contains(&IssueKind::PrepositionUsage));
        assert!(kinds("We run in the morning and rest in the afternoon.")
            .contains(&IssueKind::PrepositionUsage));
    }

    #[test]
    fn structure_checks() {
        let short = kinds("Run!");
        assert!(short.contains(&IssueKind::SentenceLength));
        // "Run" is a verb; nothing can be the subject.
        assert_eq!(
            short
                .iter()
                .filter(|k| **k == IssueKind::SentenceStructure)
                .count(),
            1
        );
        assert!(kinds("The big red ball.").contains(&IssueKind::SentenceStructure));
    }

    #[test]
    fn improvement_areas_rank_by_frequency() {
        let detector = GrammarDetector::default();
        let counts = BTreeMap::from([
            (IssueKind::ArticleUsage, 1),
            (IssueKind::SentenceLength, 3),
            (IssueKind::SubjectVerbAgreement, 1),
            (IssueKind::TenseConsistency, 2),
        ]);
        let areas = detector.improvement_areas(&counts);
        assert_eq!(
            areas,
            vec![
                IssueKind::SentenceLength.improvement_area(),
                IssueKind::TenseConsistency.improvement_area(),
                IssueKind::SubjectVerbAgreement.improvement_area(),
            ]
        );
    }

    #[test]
    fn no_sentences_scores_100() {
        let report = analyze(&[]);
        assert_eq!(report.grammar_score, 100.0);
        assert_eq!(report.total_issues, 0);
    }
}
