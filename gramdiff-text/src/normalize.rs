//! Unigram Normalizer
//!
//! Per-document preprocessing for order-1 counting: lowercase,
//! alphabetic-only tokens, stop-word removal, lemmatization. Pure over
//! one document; safe to call across arbitrarily many documents.

use crate::lemma::Lemmatizer;
use crate::stop_words::StopWords;

/// Normalizes raw document text into a lemmatized, stop-word-free
/// token string for unigram extraction.
#[derive(Debug, Clone)]
pub struct UnigramNormalizer {
    stop_words: StopWords,
    lemmatizer: Lemmatizer,
}

impl Default for UnigramNormalizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl UnigramNormalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Produce a whitespace-joined string of normalized tokens of
    /// length >= 2, order preserved. Empty or all-stop-word input
    /// yields an empty string; downstream counting simply contributes
    /// zero terms.
    pub fn normalize(&self, text: &str) -> String {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
            .filter_map(|token| {
                let lower = token.to_lowercase();
                if self.stop_words.contains(&lower) {
                    return None;
                }
                let lemma = self.lemmatizer.lemma(&lower);
                if lemma.chars().count() < 2 {
                    return None;
                }
                Some(lemma)
            })
            .collect();

        tokens.join(" ")
    }
}
