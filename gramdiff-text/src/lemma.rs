//! Rule-Based English Lemmatizer
//!
//! Collapses plurals and common verb/adverb suffixes so that singular,
//! plural, and inflected forms count as one unigram. Rule-based, not a
//! dictionary lemmatizer; rules favor precision on short words by
//! leaving anything ambiguous untouched.

/// Nouns whose surface form ends in `s` but is not a plural.
static INVARIANT_WORDS: &[&str] = &["news", "series", "species", "media", "analysis", "crisis"];

/// Rule-based English lemmatizer.
#[derive(Debug, Default, Clone)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Reduce a lowercase word to its lemma.
    pub fn lemma(&self, word: &str) -> String {
        // Suffix rules are byte-indexed; non-ASCII words pass through.
        if word.len() <= 3 || !word.is_ascii() || INVARIANT_WORDS.contains(&word) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if word.len() > 4 {
                return format!("{stem}y");
            }
        }
        if word.ends_with("sses") {
            return word[..word.len() - 2].to_string();
        }
        if word.ends_with("ches") || word.ends_with("shes") || word.ends_with("xes") || word.ends_with("zes") {
            return word[..word.len() - 2].to_string();
        }
        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 3 {
                return undouble(stem).to_string();
            }
        }
        if let Some(stem) = word.strip_suffix("ied") {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.len() >= 3 {
                return undouble(stem).to_string();
            }
        }
        if let Some(stem) = word.strip_suffix("ly") {
            if stem.len() >= 3 {
                return stem.to_string();
            }
        }
        if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

/// Collapse a doubled final consonant left behind by suffix stripping
/// (runn -> run), keeping at least three characters.
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    if stem.len() > 3 {
        let last = bytes[stem.len() - 1];
        let prev = bytes[stem.len() - 2];
        if last == prev && !matches!(last, b'a' | b'e' | b'i' | b'o' | b'u' | b's' | b'l') {
            return &stem[..stem.len() - 1];
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_collapsing() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("claims"), "claim");
        assert_eq!(lemmatizer.lemma("studies"), "study");
        assert_eq!(lemmatizer.lemma("watches"), "watch");
        assert_eq!(lemmatizer.lemma("classes"), "class");
    }

    #[test]
    fn test_verb_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("breaking"), "break");
        assert_eq!(lemmatizer.lemma("running"), "run");
        assert_eq!(lemmatizer.lemma("claimed"), "claim");
        assert_eq!(lemmatizer.lemma("tried"), "try");
    }

    #[test]
    fn test_invariant_and_short_words() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("news"), "news");
        assert_eq!(lemmatizer.lemma("crisis"), "crisis");
        assert_eq!(lemmatizer.lemma("gas"), "gas");
        assert_eq!(lemmatizer.lemma("vote"), "vote");
    }

    #[test]
    fn test_short_stems_left_alone() {
        let lemmatizer = Lemmatizer::new();
        // Stripping would leave fewer than three characters.
        assert_eq!(lemmatizer.lemma("bring"), "bring");
        assert_eq!(lemmatizer.lemma("bed"), "bed");
    }
}
