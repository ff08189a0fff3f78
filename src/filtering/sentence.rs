//! sentence-level filtering
use super::Filter;
use crate::tokenize::{UnicodeWords, WordTokenizer};

/// Default maximum number of words in a sentence.
pub const MAX_WORDS: usize = 14;

/// Word count filter.
/// Returns `false` if provided sentence has more than [WordCount::max_words] words.
///
/// [WordCount::max_words] is [MAX_WORDS] by default.
pub struct WordCount<T = UnicodeWords> {
    max_words: usize,
    tokenizer: T,
}

impl<T: WordTokenizer> WordCount<T> {
    pub fn new(max_words: usize, tokenizer: T) -> Self {
        Self {
            max_words,
            tokenizer,
        }
    }

    /// Get a reference to the filter's max words.
    pub fn max_words(&self) -> &usize {
        &self.max_words
    }

    /// number of words in `sentence`.
    pub fn count(&self, sentence: &str) -> usize {
        self.tokenizer.tokenize_words(sentence).len()
    }
}

impl WordCount {
    /// specify a maximum word count
    pub fn with_max_words(max_words: usize) -> Self {
        Self::new(max_words, UnicodeWords)
    }
}

impl<T: WordTokenizer + Default> Filter<&str> for WordCount<T> {
    fn detect(&self, sentence: &str) -> bool {
        self.count(sentence) <= self.max_words
    }
}

impl<T: WordTokenizer + Default> Default for WordCount<T> {
    fn default() -> Self {
        Self::new(MAX_WORDS, T::default())
    }
}
