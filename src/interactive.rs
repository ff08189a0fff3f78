//! Terminal prompts.
use std::io::{BufRead, Write};

use sentence_collector::error::Error;
use sentence_collector::review::{ReviewDecision, ReviewSession};

enum Answer {
    Decision(ReviewDecision),
    Skip,
    Quit,
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Decision(ReviewDecision::Validated)),
        "n" | "no" => Some(Answer::Decision(ReviewDecision::Invalidated)),
        "" | "s" | "skip" => Some(Answer::Skip),
        "q" | "quit" => Some(Answer::Quit),
        _ => None,
    }
}

/// Read a line, `None` on end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask for a decision on every sentence of `session`.
///
/// Skipped sentences stay unreviewed, as do the remaining ones after `q` or end of input.
/// Returns the number of decisions taken.
pub fn review<R: BufRead, W: Write>(
    session: &mut ReviewSession,
    mut input: R,
    mut output: W,
) -> Result<usize, Error> {
    let sentences = session.sentences().to_vec();
    let total = sentences.len();
    let mut decided = 0;

    'sentences: for (idx, sentence) in sentences.iter().enumerate() {
        loop {
            write!(output, "[{}/{total}] {sentence}\n  keep? (y)es/(n)o/(s)kip/(q)uit: ", idx + 1)?;
            output.flush()?;

            let line = match read_answer(&mut input)? {
                Some(line) => line,
                None => break 'sentences,
            };
            match parse_answer(&line) {
                Some(Answer::Decision(decision)) => {
                    session.decide(sentence, decision)?;
                    decided += 1;
                    break;
                }
                Some(Answer::Skip) => break,
                Some(Answer::Quit) => break 'sentences,
                None => writeln!(output, "  unknown answer {:?}", line.trim())?,
            }
        }
    }
    Ok(decided)
}

/// Yes/no question, defaulting to no.
pub fn confirm<R: BufRead, W: Write>(question: &str, mut input: R, mut output: W) -> Result<bool, Error> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;
    Ok(read_answer(&mut input)?
        .map(|line| matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sentence_collector::review::{CandidatePool, ReviewSession};

    use super::{confirm, review};

    fn session() -> ReviewSession {
        let pool: CandidatePool = vec!["One.".to_string(), "Two.".to_string(), "Three.".to_string()]
            .into_iter()
            .collect();
        ReviewSession::new(&pool)
    }

    #[test]
    fn decisions() {
        let mut session = session();
        let mut output = Vec::new();
        let decided = review(&mut session, Cursor::new("y\nwhat\nn\ns\n"), &mut output).unwrap();
        assert_eq!(decided, 2);

        let result = session.finish();
        assert_eq!(result.validated, vec!["One."]);
        assert_eq!(result.invalidated, vec!["Two."]);
        assert_eq!(result.unreviewed, vec!["Three."]);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("unknown answer \"what\""));
    }

    #[test]
    fn quit_leaves_the_rest_unreviewed() {
        let mut session = session();
        review(&mut session, Cursor::new("n\nq\n"), Vec::new()).unwrap();
        let result = session.finish();
        assert_eq!(result.invalidated, vec!["One."]);
        assert_eq!(result.unreviewed, vec!["Two.", "Three."]);
    }

    #[test]
    fn end_of_input() {
        let mut session = session();
        assert_eq!(review(&mut session, Cursor::new(""), Vec::new()).unwrap(), 0);
        assert_eq!(session.finish().unreviewed.len(), 3);
    }

    #[test]
    fn confirmation_defaults_to_no() {
        assert!(confirm("Submit?", Cursor::new("y\n"), Vec::new()).unwrap());
        assert!(!confirm("Submit?", Cursor::new("\n"), Vec::new()).unwrap());
        assert!(!confirm("Submit?", Cursor::new(""), Vec::new()).unwrap());
    }
}
