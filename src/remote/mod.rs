/*! External collaborators.

The pipeline talks to two remote services:
- a [CorpusStore], telling which sentences already exist for a language,
- a [SubmissionEndpoint], accepting ready sentences.

[memory] holds in-memory implementations, [http] ones talking JSON over HTTP.
!*/
#![allow(async_fn_in_trait)]

pub mod http;
pub mod memory;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lang::Lang;

pub use http::{Credentials, HttpCorpusStore, HttpEndpoint};
pub use memory::{MemoryCorpusStore, MemorySubmissionEndpoint};

/// A sentence the corpus store already knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingSentence {
    pub sentence: String,
}

/// Why a single sentence was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub sentence: String,
    pub error: String,
}

/// Outcome of a submission: partial acceptance is expressed here, not through errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub sentences: Vec<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

pub trait CorpusStore {
    /// Returns the subset of `sentences` already present in the corpus of `lang`.
    async fn validate_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<Vec<ExistingSentence>, Error>;
}

pub trait SubmissionEndpoint {
    async fn submit_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<SubmissionResponse, Error>;
}

impl<T: CorpusStore> CorpusStore for &T {
    async fn validate_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<Vec<ExistingSentence>, Error> {
        (**self).validate_sentences(lang, sentences).await
    }
}

impl<T: SubmissionEndpoint> SubmissionEndpoint for &T {
    async fn submit_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<SubmissionResponse, Error> {
        (**self).submit_sentences(lang, sentences).await
    }
}
