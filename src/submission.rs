//! Submission of ready sentences.
use log::{error, info};

use crate::error::Error;
use crate::lang::Lang;
use crate::remote::{SubmissionEndpoint, SubmissionResponse};

/// Counts reported to the user after a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub accepted: usize,
    pub errors: usize,
}

impl SubmissionSummary {
    /// `None` when nothing was accepted.
    pub fn message(&self) -> Option<String> {
        (self.accepted > 0).then(|| format!("Submitted {} sentences.", self.accepted))
    }

    /// `None` when nothing failed.
    pub fn error_message(&self) -> Option<String> {
        (self.errors > 0).then(|| format!("{} sentences failed", self.errors))
    }
}

impl From<&SubmissionResponse> for SubmissionSummary {
    fn from(response: &SubmissionResponse) -> Self {
        Self {
            accepted: response.sentences.len(),
            errors: response.errors.len(),
        }
    }
}

/// Send `sentences` in a single call. Failures are not retried.
pub async fn submit<E: SubmissionEndpoint>(
    lang: &Lang,
    sentences: &[String],
    endpoint: &E,
) -> Result<SubmissionResponse, Error> {
    info!("{lang}: submitting {} sentences", sentences.len());
    endpoint
        .submit_sentences(lang, sentences)
        .await
        .map_err(|e| {
            error!("{lang}: submission failed: {e}");
            Error::submission(e)
        })
}
