//! Language codes.
//!
//! A [Lang] selects which corpus (and which submission queue) a batch of sentences belongs to.
//! Codes are opaque to the pipeline: anything non-empty is accepted,
//! but codes that are not well-formed BCP-47 tags are reported in the logs.
use std::fmt;
use std::str::FromStr;

use log::warn;
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Lang(String);

impl Lang {
    pub fn new(code: &str) -> Result<Self, Error> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Error::Validation("Please select a language.".to_string()));
        }

        if LanguageTag::parse(code).is_err() {
            warn!("{code} is not a well-formed language tag");
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Lang {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Lang> for String {
    fn from(l: Lang) -> Self {
        l.0
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
