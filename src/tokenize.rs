//! Word tokenization.
//!
//! Only used to count words when filtering sentences by length.
use unicode_segmentation::UnicodeSegmentation;

pub trait WordTokenizer {
    /// split a sentence into words.
    fn tokenize_words<'a>(&self, sentence: &'a str) -> Vec<&'a str>;
}

/// Unicode word boundaries (UAX #29).
///
/// Punctuation and whitespace are not words.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWords;

impl WordTokenizer for UnicodeWords {
    fn tokenize_words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.unicode_words().collect()
    }
}
