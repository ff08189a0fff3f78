//! In-memory corpus, for tests and offline runs.
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use super::{CorpusStore, ErrorDetail, ExistingSentence, SubmissionEndpoint, SubmissionResponse};
use crate::error::Error;
use crate::lang::Lang;

type Corpus = HashMap<Lang, HashSet<String>>;

fn lock(corpus: &Mutex<Corpus>) -> Result<MutexGuard<'_, Corpus>, Error> {
    corpus
        .lock()
        .map_err(|e| Error::Custom(format!("poisoned corpus lock: {e}")))
}

/// Per-language sets of known sentences.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpusStore {
    corpus: Arc<Mutex<Corpus>>,
    unavailable: bool,
}

impl MemoryCorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose lookups always fail.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// Add sentences to the corpus of `lang`.
    pub fn insert<I, S>(&self, lang: &Lang, sentences: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = lock(&self.corpus)?;
        corpus
            .entry(lang.clone())
            .or_default()
            .extend(sentences.into_iter().map(Into::into));
        Ok(())
    }

    /// Number of sentences known for `lang`.
    pub fn len(&self, lang: &Lang) -> Result<usize, Error> {
        Ok(lock(&self.corpus)?.get(lang).map_or(0, HashSet::len))
    }

    pub fn contains(&self, lang: &Lang, sentence: &str) -> Result<bool, Error> {
        Ok(lock(&self.corpus)?
            .get(lang)
            .map_or(false, |sentences| sentences.contains(sentence)))
    }
}

impl CorpusStore for MemoryCorpusStore {
    async fn validate_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<Vec<ExistingSentence>, Error> {
        if self.unavailable {
            return Err(Error::Custom("corpus store unavailable".to_string()));
        }

        let corpus = lock(&self.corpus)?;
        let known = match corpus.get(lang) {
            Some(known) => known,
            None => return Ok(Vec::new()),
        };

        Ok(sentences
            .iter()
            .filter(|sentence| known.contains(sentence.as_str()))
            .map(|sentence| ExistingSentence {
                sentence: sentence.clone(),
            })
            .collect())
    }
}

/// Endpoint adding submitted sentences to a [MemoryCorpusStore].
///
/// Sentences already in the corpus (or repeated in the batch) are reported as errors.
#[derive(Debug, Clone, Default)]
pub struct MemorySubmissionEndpoint {
    corpus: Arc<Mutex<Corpus>>,
    failure: Option<String>,
}

impl MemorySubmissionEndpoint {
    /// Endpoint writing into the corpus of `store`.
    pub fn for_store(store: &MemoryCorpusStore) -> Self {
        Self {
            corpus: store.corpus.clone(),
            failure: None,
        }
    }

    /// An endpoint rejecting every submission with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Default::default()
        }
    }
}

impl SubmissionEndpoint for MemorySubmissionEndpoint {
    async fn submit_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<SubmissionResponse, Error> {
        if let Some(reason) = &self.failure {
            return Err(Error::Custom(reason.clone()));
        }

        let mut corpus = lock(&self.corpus)?;
        let known = corpus.entry(lang.clone()).or_default();

        let mut response = SubmissionResponse::default();
        for sentence in sentences {
            if known.insert(sentence.clone()) {
                response.sentences.push(sentence.clone());
            } else {
                response.errors.push(ErrorDetail {
                    sentence: sentence.clone(),
                    error: "sentence already exists".to_string(),
                });
            }
        }

        debug!(
            "{lang}: accepted {}, rejected {}",
            response.sentences.len(),
            response.errors.len()
        );
        Ok(response)
    }
}
