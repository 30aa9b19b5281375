//! Ordered `(predicate, category)` registry shared by the word classifiers.
//!
//! Both the POS classifier and the vocabulary leveler resolve ambiguous words
//! by precedence, so precedence lives here and nowhere else: rules are
//! evaluated in insertion order and the first match wins.

use std::collections::HashSet;

/// Test applied to a lower-cased word.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Exact membership in a word table.
    InSet(&'static HashSet<&'static str>),
    /// `-s` or `-es` inflection whose stem is in the table.
    StemInSet(&'static HashSet<&'static str>),
    /// Ends with one of `suffixes` and is at least `min_len` chars long.
    Suffix {
        suffixes: &'static [&'static str],
        min_len: usize,
    },
    MinLength(usize),
    MaxLength(usize),
}

impl Predicate {
    pub fn matches(&self, word: &str) -> bool {
        let len = word.chars().count();
        match *self {
            Predicate::InSet(set) => set.contains(word),
            Predicate::StemInSet(set) => inflection_stems(word).any(|stem| set.contains(stem)),
            Predicate::Suffix { suffixes, min_len } => {
                len >= min_len && suffixes.iter().any(|s| word.ends_with(s))
            }
            Predicate::MinLength(n) => len >= n,
            Predicate::MaxLength(n) => len <= n,
        }
    }

    /// Whether the predicate looks only at word shape, not at a dictionary.
    pub fn is_shape_only(&self) -> bool {
        !matches!(self, Predicate::InSet(_) | Predicate::StemInSet(_))
    }
}

/// Candidate stems for a regular plural or third-person form.
fn inflection_stems(word: &str) -> impl Iterator<Item = &str> {
    let s = word.strip_suffix('s').filter(|_| !word.ends_with("ss"));
    let es = word.strip_suffix("es");
    [s, es]
        .into_iter()
        .flatten()
        .filter(|stem| stem.len() >= 2)
}

#[derive(Debug, Clone, Copy)]
pub struct Rule<C> {
    pub name: &'static str,
    pub predicate: Predicate,
    pub category: C,
}

/// Outcome of evaluating a [`RuleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<C> {
    pub category: C,
    /// Name of the rule that fired, or `"default"` when none did.
    pub rule: &'static str,
}

#[derive(Debug, Clone)]
pub struct RuleSet<C> {
    rules: Vec<Rule<C>>,
    fallback: C,
}

impl<C: Copy> RuleSet<C> {
    pub fn new(fallback: C) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn rule(mut self, name: &'static str, predicate: Predicate, category: C) -> Self {
        self.rules.push(Rule {
            name,
            predicate,
            category,
        });
        self
    }

    pub fn apply(&self, word: &str) -> RuleMatch<C> {
        self.rules
            .iter()
            .find(|r| r.predicate.matches(word))
            .map(|r| RuleMatch {
                category: r.category,
                rule: r.name,
            })
            .unwrap_or(RuleMatch {
                category: self.fallback,
                rule: "default",
            })
    }

    /// The same registry with every dictionary rule removed.
    pub fn shape_only(&self) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .filter(|r| r.predicate.is_shape_only())
                .copied()
                .collect(),
            fallback: self.fallback,
        }
    }

    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }
}
