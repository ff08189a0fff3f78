//! Whitespace tokens with their byte span in the source text.
//!
//! Both the trainer and the tokenizer work on these, so that
//! word types and punctuation rules are computed the same way.
use std::ops::Range;

const OPENING: &[char] = &['"', '\'', '(', '[', '{', '“', '‘', '«', '¿', '¡'];
const CLOSING: &[char] = &['"', '\'', ')', ']', '}', '”', '’', '»'];

/// type given to every numeric token.
pub const NUMBER: &str = "##number##";

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    text: &'a str,
    span: Range<usize>,

    // annotations
    pub sentbreak: bool,
    pub abbr: bool,
    pub ellipsis: bool,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            span: start..start + text.len(),
            sentbreak: false,
            abbr: false,
            ellipsis: false,
        }
    }

    /// raw token text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// byte range of the token in the tokenized text.
    pub fn span(&self) -> &Range<usize> {
        &self.span
    }

    /// token without surrounding quotes/brackets.
    pub fn core(&self) -> &'a str {
        self.text
            .trim_end_matches(CLOSING)
            .trim_start_matches(OPENING)
    }

    /// last meaningful character (closing quotes and brackets are skipped).
    pub fn terminal(&self) -> Option<char> {
        self.text.trim_end_matches(CLOSING).chars().last()
    }

    pub fn period_final(&self) -> bool {
        self.core().ends_with('.')
    }

    /// `?` and `!` always end a sentence.
    pub fn ends_with_strong_punct(&self) -> bool {
        matches!(self.terminal(), Some('?' | '!' | '‽'))
    }

    pub fn is_ellipsis(&self) -> bool {
        let core = self.core();
        core.ends_with("..") || core.ends_with('…')
    }

    /// a single letter followed by a period, like in `J. R. R. Tolkien`.
    pub fn is_initial(&self) -> bool {
        let mut chars = self.core().chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(c), Some('.'), None) if c.is_alphabetic()
        )
    }

    /// lowercased word type, keeping a final period.
    pub fn typ(&self) -> String {
        let core = self.core();
        match core.strip_suffix('.') {
            Some(base) if is_number(base) => format!("{NUMBER}."),
            _ if is_number(core) => NUMBER.to_string(),
            _ => core.to_lowercase(),
        }
    }

    /// word type with the final period removed.
    pub fn typ_no_period(&self) -> String {
        let typ = self.typ();
        match typ.strip_suffix('.') {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => typ,
        }
    }

    fn first_char(&self) -> Option<char> {
        self.core().chars().next()
    }

    pub fn first_upper(&self) -> bool {
        self.first_char().map_or(false, char::is_uppercase)
    }

    pub fn first_lower(&self) -> bool {
        self.first_char().map_or(false, char::is_lowercase)
    }

    /// token made only of punctuation, like a lone `-` or `;`.
    pub fn is_non_word(&self) -> bool {
        !self.text.chars().any(char::is_alphanumeric)
    }
}

/// integers, decimals, dates and the like.
pub fn is_number(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '-' | '/'))
}

/// split on whitespace, keeping byte offsets.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token::new(&text[s..idx], s));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => (),
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&text[s..], s));
    }
    tokens
}
