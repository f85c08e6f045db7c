//! Vocabulary Gate
//!
//! Cross-order pruning: phrases survive only if their constituent
//! words were accepted at the unigram stage. The vocabulary is built
//! once during order-1 processing and passed immutably into orders 2
//! and 3.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Constituent-word rule for phrase survival.
///
/// `All` is the stricter reading and the default; `Any` keeps a phrase
/// as soon as one constituent is in vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    #[default]
    All,
    Any,
}

impl FromStr for GatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(GatePolicy::All),
            "any" => Ok(GatePolicy::Any),
            other => Err(format!("unknown gate policy `{other}` (expected all|any)")),
        }
    }
}

/// The set of unigrams that cleared the survival threshold at order 1.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the surviving order-1 terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether a space-joined phrase passes the gate under the policy.
    pub fn admits(&self, policy: GatePolicy, phrase: &str) -> bool {
        let mut words = phrase.split_whitespace();
        match policy {
            GatePolicy::All => words.all(|w| self.contains(w)),
            GatePolicy::Any => words.any(|w| self.contains(w)),
        }
    }
}
