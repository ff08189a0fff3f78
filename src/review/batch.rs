//! Results of a review session.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::CandidatePool;
use crate::error::Error;

/// Judgement given by a reviewer to a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Validated,
    Invalidated,
}

/// Outcome of one review session.
///
/// Every sentence under review appears in exactly one of the lists.
/// Sentences the reviewer skipped stay in `unreviewed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewBatchResult {
    #[serde(default)]
    pub unreviewed: Vec<String>,
    #[serde(default)]
    pub validated: Vec<String>,
    #[serde(default)]
    pub invalidated: Vec<String>,
}

impl ReviewBatchResult {
    /// Ensure that the result accounts for each of the `reviewing` sentences, and only them.
    pub fn check_against(&self, reviewing: &CandidatePool) -> Result<(), Error> {
        let mut outcomes: HashMap<&str, usize> = HashMap::new();
        for sentence in self
            .unreviewed
            .iter()
            .chain(&self.validated)
            .chain(&self.invalidated)
        {
            if !reviewing.contains(sentence) {
                return Err(Error::InvalidReview(format!(
                    "{sentence:?} was not under review"
                )));
            }
            *outcomes.entry(sentence.as_str()).or_default() += 1;
        }

        if let Some((sentence, _)) = outcomes.iter().find(|(_, count)| **count > 1) {
            return Err(Error::InvalidReview(format!(
                "{sentence:?} has more than one outcome"
            )));
        }

        match reviewing
            .iter()
            .find(|sentence| !outcomes.contains_key(sentence.as_str()))
        {
            Some(sentence) => Err(Error::InvalidReview(format!(
                "{sentence:?} has no outcome"
            ))),
            None => Ok(()),
        }
    }
}

/// Collects decisions for the sentences under review.
///
/// Sentences without a decision end up in [ReviewBatchResult::unreviewed].
#[derive(Debug, Clone)]
pub struct ReviewSession {
    sentences: Vec<String>,
    decisions: Vec<Option<ReviewDecision>>,
}

impl ReviewSession {
    pub fn new(reviewing: &CandidatePool) -> Self {
        Self {
            sentences: reviewing.as_slice().to_vec(),
            decisions: vec![None; reviewing.len()],
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    fn position(&self, sentence: &str) -> Result<usize, Error> {
        self.sentences
            .iter()
            .position(|s| s == sentence)
            .ok_or_else(|| Error::InvalidReview(format!("{sentence:?} is not under review")))
    }

    pub fn decide(&mut self, sentence: &str, decision: ReviewDecision) -> Result<(), Error> {
        let idx = self.position(sentence)?;
        self.decisions[idx] = Some(decision);
        Ok(())
    }

    /// Forget a previous decision.
    pub fn defer(&mut self, sentence: &str) -> Result<(), Error> {
        let idx = self.position(sentence)?;
        self.decisions[idx] = None;
        Ok(())
    }

    pub fn finish(self) -> ReviewBatchResult {
        let mut result = ReviewBatchResult::default();
        for (sentence, decision) in self.sentences.into_iter().zip(self.decisions) {
            match decision {
                Some(ReviewDecision::Validated) => result.validated.push(sentence),
                Some(ReviewDecision::Invalidated) => result.invalidated.push(sentence),
                None => result.unreviewed.push(sentence),
            }
        }
        result
    }
}
