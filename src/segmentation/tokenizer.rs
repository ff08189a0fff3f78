//! Sentence tokenizer using learnt [PunktParameters].
use super::params::{OrthoContext, PunktParameters};
use super::token::{self, Token, NUMBER};
use super::SentenceSegmenter;

/// Annotate tokens using only their own content.
///
/// `?` and `!` end sentences, periods end sentences unless they end a known abbreviation.
/// Ellipses are flagged and decided in [second_pass].
pub(crate) fn first_pass(tokens: &mut [Token], params: &PunktParameters) {
    for tok in tokens.iter_mut() {
        if tok.ends_with_strong_punct() {
            tok.sentbreak = true;
        } else if tok.is_ellipsis() {
            tok.ellipsis = true;
        } else if tok.period_final() {
            let typ = tok.typ_no_period();
            // hyphenated words ending with an abbreviation, like `Jean-Dr.`
            let last_part = typ.rsplit('-').next().unwrap_or(&typ);
            if params.is_abbrev(&typ) || params.is_abbrev(last_part) {
                tok.abbr = true;
            } else {
                tok.sentbreak = true;
            }
        }
    }
}

/// Decide on abbreviations, ellipses and initials by looking at the following token.
fn second_pass(tokens: &mut [Token], params: &PunktParameters) {
    for idx in 1..tokens.len() {
        let (head, tail) = tokens.split_at_mut(idx);
        let tok = &mut head[idx - 1];
        let next = &tail[0];

        let is_initial = tok.is_initial();
        let is_number = tok.period_final() && tok.typ_no_period() == NUMBER;

        if (tok.abbr || tok.ellipsis) && !is_initial {
            if ortho_heuristic(next, params) == Some(true)
                || (next.first_upper() && params.is_sent_starter(&next.typ_no_period()))
            {
                tok.sentbreak = true;
            }
            continue;
        }

        if is_initial || is_number {
            match ortho_heuristic(next, params) {
                Some(false) => {
                    tok.sentbreak = false;
                    tok.abbr = true;
                }
                None if is_initial
                    && next.first_upper()
                    && !params
                        .ortho_context(&next.typ_no_period())
                        .contains(OrthoContext::LC) =>
                {
                    tok.sentbreak = false;
                    tok.abbr = true;
                }
                _ => (),
            }
        }
    }
}

/// Does `tok` start a sentence judging by the casing its type was seen with?
///
/// `None` means there is not enough evidence.
fn ortho_heuristic(tok: &Token, params: &PunktParameters) -> Option<bool> {
    if matches!(tok.text(), ";" | ":" | "," | "." | "!" | "?") {
        return Some(false);
    }

    let ortho = params.ortho_context(&tok.typ_no_period());

    if tok.first_upper()
        && ortho.contains(OrthoContext::LC)
        && !ortho.contains(OrthoContext::MID_UC)
    {
        return Some(true);
    }

    if tok.first_lower()
        && (ortho.contains(OrthoContext::UC) || !ortho.contains(OrthoContext::BEG_LC))
    {
        return Some(false);
    }

    None
}

/// Boundary detection driven by learnt [PunktParameters].
#[derive(Debug, Clone, Copy)]
pub struct PunktSegmenter<'p> {
    params: &'p PunktParameters,
}

impl<'p> PunktSegmenter<'p> {
    pub fn new(params: &'p PunktParameters) -> Self {
        Self { params }
    }

    /// Segmenter backed by the process-wide English model.
    pub fn english() -> PunktSegmenter<'static> {
        PunktSegmenter::new(&super::ENGLISH)
    }

    /// Byte ranges of the sentences in `text`, untrimmed.
    pub fn span_tokenize(&self, text: &str) -> Vec<std::ops::Range<usize>> {
        let mut tokens = token::tokenize(text);
        first_pass(&mut tokens, self.params);
        second_pass(&mut tokens, self.params);

        let mut spans = Vec::new();
        let mut start = 0;
        for tok in tokens.iter().filter(|tok| tok.sentbreak) {
            let end = tok.span().end;
            spans.push(start..end);
            start = end;
        }
        if start < text.len() {
            spans.push(start..text.len());
        }
        spans
    }
}

impl SentenceSegmenter for PunktSegmenter<'_> {
    fn segment(&self, text: &str) -> Vec<String> {
        self.span_tokenize(text)
            .into_iter()
            .map(|span| text[span].trim())
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PunktSegmenter;
    use crate::segmentation::{PunktParameters, PunktTrainer, SentenceSegmenter};

    fn segment(text: &str) -> Vec<String> {
        PunktSegmenter::english().segment(text)
    }

    #[test]
    fn simple() {
        assert_eq!(
            segment("Hello world. Second one."),
            vec!["Hello world.", "Second one."]
        );
    }

    #[test]
    fn question_and_exclamation() {
        assert_eq!(
            segment("Is it raining? Yes! Take an umbrella."),
            vec!["Is it raining?", "Yes!", "Take an umbrella."]
        );
    }

    #[test]
    fn learnt_abbreviations() {
        assert_eq!(
            segment("Mr. Smith went to Washington. He arrived at noon."),
            vec!["Mr. Smith went to Washington.", "He arrived at noon."]
        );
        assert_eq!(
            segment("I met Dr. Jones on Main St. yesterday."),
            vec!["I met Dr. Jones on Main St. yesterday."]
        );
    }

    #[test]
    fn abbreviation_followed_by_lowercase() {
        assert_eq!(
            segment("Bring fruit, e.g. apples and pears. Then leave."),
            vec!["Bring fruit, e.g. apples and pears.", "Then leave."]
        );
    }

    #[test]
    fn initials() {
        assert_eq!(
            segment("J. R. R. Tolkien wrote many books. They are long."),
            vec!["J. R. R. Tolkien wrote many books.", "They are long."]
        );
    }

    #[test]
    fn closing_quotes_stay_with_sentence() {
        assert_eq!(
            segment("She said \"stop.\" Then she left."),
            vec!["She said \"stop.\"", "Then she left."]
        );
    }

    #[test]
    fn unterminated_tail() {
        assert_eq!(segment("  One.   two words  "), vec!["One.", "two words"]);
    }

    #[test]
    fn empty() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }

    #[test]
    fn resegmenting_joined_output_is_stable() {
        let text = "Mr. Smith went to Washington. He arrived at noon! Did he stay? \
                    I met Dr. Jones on Main St. yesterday. Bring fruit, e.g. apples.";
        let first = segment(text);
        let second = segment(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn untrained_parameters_split_on_every_period() {
        let params = PunktParameters::default();
        let seg = PunktSegmenter::new(&params);
        assert_eq!(seg.segment("Mr. Smith left."), vec!["Mr.", "Smith left."]);
    }

    #[test]
    fn custom_training() {
        let mut trainer = PunktTrainer::new();
        trainer.train(&"The dept. office opened early this morning for every visitor. ".repeat(8));
        let params = trainer.into_params();
        let seg = PunktSegmenter::new(&params);
        assert_eq!(
            seg.segment("Call the dept. office now. Thanks."),
            vec!["Call the dept. office now.", "Thanks."]
        );
    }
}
