//! Command line arguments and parameters management/parsing.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use structopt::StructOpt;

use sentence_collector::error::Error;
use sentence_collector::pipeline::CollectorConfig;
use sentence_collector::remote::Credentials;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sentence-collector",
    about = "Sentence collection tool for speech corpora."
)]
/// Holds every command that is callable by the `sentence-collector` command.
pub enum SentenceCollector {
    #[structopt(about = "Segment and filter sentences without submitting them")]
    Check(Check),
    #[structopt(about = "Segment, filter, review and submit sentences")]
    Submit(Submit),
    #[structopt(about = "Train a sentence boundary model")]
    Train(Train),
}

/// Options shared by commands that run the collection pipeline.
#[derive(Debug, StructOpt)]
pub struct Collect {
    #[structopt(help = "language of the sentences (BCP-47 tag)")]
    pub lang: String,
    #[structopt(parse(from_os_str), help = "raw text file")]
    pub src: PathBuf,
    #[structopt(
        long = "max-words",
        default_value = "14",
        help = "maximum number of words of a sentence"
    )]
    pub max_words: usize,
    #[structopt(
        parse(from_os_str),
        long = "model",
        help = "sentence boundary model (see `train`). Default is the bundled english one."
    )]
    pub model: Option<PathBuf>,
    #[structopt(
        long = "no-cross-check",
        help = "do not compare segmentation with the rule-based segmenter"
    )]
    pub no_cross_check: bool,
}

impl Collect {
    pub fn config(&self) -> CollectorConfig {
        CollectorConfig {
            max_words: self.max_words,
            cross_check: !self.no_cross_check,
        }
    }
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
///
/// ```sh
/// sentence-collector-check 0.1.0
/// Segment and filter sentences without submitting them
///
/// USAGE:
///     sentence-collector check [FLAGS] [OPTIONS] <lang> <src>
///
/// FLAGS:
///     -h, --help              Prints help information
///         --no-cross-check    do not compare segmentation with the rule-based segmenter
///     -V, --version           Prints version information
///
/// OPTIONS:
///     -e, --existing <existing>      known sentences, one per line
///         --max-words <max-words>    maximum number of words of a sentence [default: 14]
///         --model <model>            sentence boundary model (see `train`)
/// ```
pub struct Check {
    #[structopt(flatten)]
    pub collect: Collect,
    #[structopt(
        parse(from_os_str),
        short = "e",
        long = "existing",
        help = "known sentences, one per line"
    )]
    pub existing: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Submit command and parameters.
pub struct Submit {
    #[structopt(flatten)]
    pub collect: Collect,
    #[structopt(long = "server", env = "COLLECTOR_SERVER", help = "sentence server base url")]
    pub server: String,
    #[structopt(long = "username", env = "COLLECTOR_USERNAME")]
    pub username: Option<String>,
    #[structopt(long = "password", env = "COLLECTOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[structopt(
        short = "r",
        long = "review",
        help = "review sentences interactively before submitting"
    )]
    pub review: bool,
    #[structopt(short = "y", long = "yes", help = "do not ask for confirmation")]
    pub yes: bool,
}

impl Submit {
    /// Credentials are only sent when a username is given.
    pub fn credentials(&self) -> Option<Credentials> {
        self.username.as_ref().map(|username| Credentials {
            username: username.clone(),
            password: self.password.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, StructOpt)]
/// Train command and parameters.
pub struct Train {
    #[structopt(parse(from_os_str), help = "plain text training corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "model destination (json)")]
    pub dst: PathBuf,
}

/// Read non-empty, trimmed lines of `path`.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use structopt::StructOpt;

    use super::{read_lines, SentenceCollector};

    #[test]
    fn lines_are_trimmed() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "  Hello world.\n\n\tSecond one.  \n").unwrap();

        let lines = read_lines(f.path()).unwrap();
        assert_eq!(lines, vec!["Hello world.", "Second one."]);
    }

    #[test]
    fn missing_file() {
        assert!(read_lines(std::path::Path::new("/nonexistent/sentences.txt")).is_err());
    }

    #[test]
    fn check_args() {
        let args = SentenceCollector::from_iter_safe(&[
            "sentence-collector",
            "check",
            "en",
            "in.txt",
            "--max-words",
            "10",
            "--no-cross-check",
        ])
        .unwrap();
        match args {
            SentenceCollector::Check(c) => {
                let config = c.collect.config();
                assert_eq!(config.max_words, 10);
                assert!(!config.cross_check);
                assert!(c.existing.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn submit_credentials() {
        let args = SentenceCollector::from_iter_safe(&[
            "sentence-collector",
            "submit",
            "en",
            "in.txt",
            "--server",
            "http://localhost:3333",
            "--username",
            "me",
        ])
        .unwrap();
        match args {
            SentenceCollector::Submit(s) => {
                let credentials = s.credentials().unwrap();
                assert_eq!(credentials.username, "me");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
