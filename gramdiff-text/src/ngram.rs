//! Word-Boundary N-Gram Tokenizer
//!
//! Splits text on non-alphanumeric boundaries, lowercases, keeps tokens
//! of two or more characters, and emits space-joined sliding windows of
//! a fixed width. Applied to raw text for orders above one so phrases
//! keep their human-readable surface form; no stop-word removal and no
//! lemmatization here.

/// Fixed-width n-gram tokenizer.
#[derive(Debug, Clone, Copy)]
pub struct NgramTokenizer {
    n: usize,
}

impl NgramTokenizer {
    /// Create a tokenizer for n-grams of the given width (n >= 1).
    pub fn new(n: usize) -> Self {
        debug_assert!(n >= 1);
        Self { n }
    }

    /// Split text into lowercase word tokens of length >= 2.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= 2)
            .map(|token| token.to_lowercase())
            .collect()
    }

    /// Produce all n-grams of the configured width, space-joined.
    pub fn ngrams(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        if words.len() < self.n {
            return Vec::new();
        }
        words.windows(self.n).map(|w| w.join(" ")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unigram_width() {
        let tokenizer = NgramTokenizer::new(1);
        let grams = tokenizer.ngrams("Breaking News today");
        assert_eq!(grams, vec!["breaking", "news", "today"]);
    }

    #[test]
    fn test_bigrams_preserve_adjacency() {
        let tokenizer = NgramTokenizer::new(2);
        let grams = tokenizer.ngrams("shocking breaking claim");
        assert_eq!(grams, vec!["shocking breaking", "breaking claim"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokenizer = NgramTokenizer::new(1);
        // Single-character tokens fall below the length floor.
        assert_eq!(tokenizer.ngrams("a b cd"), vec!["cd"]);
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let tokenizer = NgramTokenizer::new(2);
        let grams = tokenizer.ngrams("vote, fraud! claim");
        assert_eq!(grams, vec!["vote fraud", "fraud claim"]);
    }

    #[test]
    fn test_text_shorter_than_window() {
        let tokenizer = NgramTokenizer::new(3);
        assert!(tokenizer.ngrams("breaking news").is_empty());
        assert!(tokenizer.ngrams("").is_empty());
    }
}
