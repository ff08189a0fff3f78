//! Legacy separator normalization.
//!
//! Sentences exported from spreadsheets use `|` (or a newline, `\n` or `\r\n`) as a separator.
//! Before segmentation, separators are turned into sentence punctuation:
//!
//! 1. a separator following `.`, `?` or `!` (optionally with whitespace in between)
//!    is collapsed into a single space,
//! 1. every other separator becomes `". "`.
//!
//! ```
//! use sentence_collector::normalize::normalize;
//!
//! assert_eq!(normalize("Hi!|next"), "Hi! next");
//! assert_eq!(normalize("Hi|next"), "Hi. next");
//! ```
//!
//! The last row of separated text has no separator after it, and thus gets no period:
//! [punctuate_last_row] adds it once the text is segmented.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOUNDARY_SEPARATOR: Regex = Regex::new(r"([.?!])\s*(?:\r?\n|\|)").unwrap();
    static ref ANY_SEPARATOR: Regex = Regex::new(r"\r?\n|\|").unwrap();
}

/// Rewrite legacy separators into sentence punctuation.
pub fn normalize(raw: &str) -> String {
    let collapsed = BOUNDARY_SEPARATOR.replace_all(raw, "$1 ");
    ANY_SEPARATOR.replace_all(&collapsed, ". ").into_owned()
}

/// Does `raw` use legacy separators?
pub fn has_separators(raw: &str) -> bool {
    ANY_SEPARATOR.is_match(raw.trim_end())
}

/// Append a period to the last sentence if it has no ending punctuation.
pub fn punctuate_last_row(sentences: &mut [String]) {
    if let Some(last) = sentences.last_mut() {
        let ending = last.trim_end_matches(&['"', '\'', ')', ']', '”', '’', '»'][..]);
        if !ending.ends_with(&['.', '?', '!', '…'][..]) {
            last.push('.');
        }
    }
}
