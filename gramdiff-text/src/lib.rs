//! Text Analysis Primitives
//!
//! Tokenization and normalization building blocks for the n-gram
//! differential-frequency engine: stop-word filtering, rule-based
//! English lemmatization, the unigram normalizer, and the raw-text
//! word-boundary n-gram tokenizer.

mod lemma;
mod ngram;
mod normalize;
mod stop_words;

pub use lemma::Lemmatizer;
pub use ngram::NgramTokenizer;
pub use normalize::UnigramNormalizer;
pub use stop_words::{StopWords, DEFAULT_ENGLISH_STOP_WORDS};
