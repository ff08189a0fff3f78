//! Error enum
use std::fmt;

use crate::state::Operation;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Http(reqwest::Error),
    Url(url::ParseError),
    /// Missing language, empty input or nothing to submit.
    Validation(String),
    /// The corpus store could not answer an existence query.
    Lookup(Box<Error>),
    /// The submission endpoint failed or rejected the whole batch.
    Submission(Box<Error>),
    /// Another operation is still in flight.
    Busy(Operation),
    /// A review completion does not match the active review.
    StaleReview,
    /// A review result does not account for the sentences under review.
    InvalidReview(String),
    Custom(String),
}

impl Error {
    /// wraps an error coming from the corpus store.
    pub fn lookup(e: Error) -> Self {
        match e {
            e @ Error::Lookup(_) => e,
            e => Error::Lookup(Box::new(e)),
        }
    }

    /// wraps an error coming from the submission endpoint.
    pub fn submission(e: Error) -> Self {
        match e {
            e @ Error::Submission(_) => e,
            e => Error::Submission(Box::new(e)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "serialization error: {e}"),
            Error::Http(e) => write!(f, "http error: {e}"),
            Error::Url(e) => write!(f, "invalid url: {e}"),
            Error::Validation(msg) => write!(f, "{msg}"),
            Error::Lookup(e) => write!(f, "corpus lookup failed: {e}"),
            Error::Submission(e) => write!(f, "Submission error: {e}"),
            Error::Busy(op) => write!(f, "{op} already in progress"),
            Error::StaleReview => write!(f, "review does not match the active review"),
            Error::InvalidReview(msg) => write!(f, "invalid review result: {msg}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::Lookup(e) | Error::Submission(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn lookup_is_not_nested() {
        let e = Error::lookup(Error::lookup(Error::Custom("down".to_string())));
        match e {
            Error::Lookup(inner) => assert!(matches!(*inner, Error::Custom(_))),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn submission_display_keeps_detail() {
        let e = Error::submission(Error::Custom("503 Service Unavailable".to_string()));
        assert_eq!(e.to_string(), "Submission error: 503 Service Unavailable");
    }
}
