//! Configurable Stop Words
//!
//! Stop-word collections loadable from the built-in English list,
//! from files, or from custom word slices.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default English stop words.
pub static DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "back", "be", "because", "been", "before",
    "being", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "doing", "down", "during", "each", "else", "even", "every",
    "few", "first", "for", "from", "further", "had", "has", "have", "he",
    "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into",
    "is", "it", "its", "just", "last", "may", "me", "might", "more",
    "most", "much", "must", "my", "no", "nor", "not", "now", "of", "off",
    "on", "once", "one", "only", "or", "other", "our", "out", "over",
    "own", "same", "shall", "she", "should", "so", "some", "still",
    "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "us", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your",
];

/// Configurable stop words collection.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
    case_insensitive: bool,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWords {
    /// Create an empty stop words collection.
    pub fn new() -> Self {
        Self {
            words: HashSet::new(),
            case_insensitive: false,
        }
    }

    /// Create from a slice of words.
    pub fn from_slice(words: &[&str]) -> Self {
        let words = words.iter().map(|s| s.to_string()).collect();
        Self {
            words,
            case_insensitive: false,
        }
    }

    /// Create with default English stop words.
    pub fn english() -> Self {
        let mut sw = Self::from_slice(DEFAULT_ENGLISH_STOP_WORDS);
        sw.case_insensitive = true;
        sw
    }

    /// Load stop words from a file (one word per line, `#` comments).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|s| s.to_string())
            .collect();

        Ok(Self {
            words,
            case_insensitive: false,
        })
    }

    /// Set case sensitivity.
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Add a word to the collection.
    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Check whether a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        if self.case_insensitive {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of words in the collection.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults_are_case_insensitive() {
        let sw = StopWords::english();
        assert!(sw.contains("the"));
        assert!(sw.contains("The"));
        assert!(sw.contains("THE"));
        assert!(!sw.contains("breaking"));
    }

    #[test]
    fn test_custom_additions() {
        let mut sw = StopWords::new();
        assert!(sw.is_empty());
        sw.add("foo");
        assert!(sw.contains("foo"));
        assert!(!sw.contains("Foo"));
        assert_eq!(sw.len(), 1);
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let dir = std::env::temp_dir().join("gramdiff-stopwords-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        std::fs::write(&path, "# comment\nalpha\n\n  beta  \n").unwrap();

        let sw = StopWords::from_file(&path).unwrap();
        assert!(sw.contains("alpha"));
        assert!(sw.contains("beta"));
        assert_eq!(sw.len(), 2);

        std::fs::remove_file(&path).unwrap();
    }
}
