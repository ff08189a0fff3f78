//! Rule-based sentence splitting.
//!
//! A sentence ends on `.`, `?` or `!` when the next word starts with an uppercase letter,
//! a digit or an opening quote, unless the period belongs to a well-known abbreviation or an initial.
use super::token::{self, Token};
use super::SentenceSegmenter;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "prof", "jr", "sr", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "no", "fig", "approx",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    fn is_boundary(tok: &Token, next: &Token) -> bool {
        if !matches!(tok.terminal(), Some('.' | '?' | '!' | '…')) {
            return false;
        }

        let starts_sentence = next
            .text()
            .chars()
            .next()
            .map_or(false, |c| c.is_uppercase() || c.is_ascii_digit() || "\"'“‘(".contains(c));
        if !starts_sentence {
            return false;
        }

        if tok.period_final() && !tok.is_ellipsis() {
            return !(tok.is_initial() || ABBREVIATIONS.contains(&tok.typ_no_period().as_str()));
        }
        true
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let tokens = token::tokenize(text);
        let mut sentences = Vec::new();
        let mut start = 0;

        for (tok, next) in tokens.iter().zip(tokens.iter().skip(1)) {
            if Self::is_boundary(tok, next) {
                let end = tok.span().end;
                sentences.push(text[start..end].trim().to_string());
                start = end;
            }
        }
        sentences.push(text[start..].trim().to_string());

        sentences.retain(|s| !s.is_empty());
        sentences
    }
}
