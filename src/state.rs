//! Pipeline state and its transitions.
//!
//! [PipelineState] is an immutable value: every transition returns a new state,
//! so that a host (UI event handlers, the CLI) only ever swaps whole states.
//!
//! ```text
//!            begin_ingestion          finish_ingestion
//!   Idle ─────────────────────▶ ... ─────────────────────▶ AwaitingConfirmation
//!                                                            │          ▲
//!                                              start_review  │          │ complete_review
//!                                                            ▼          │
//!                                                           Reviewing ──┘
//!
//!   AwaitingConfirmation ── begin_submission / finish_submission ──▶ Idle (with a message)
//!   any state ── cancel ──▶ Idle
//! ```
//!
//! Asynchronous steps (corpus lookup, submission) are split into a `begin_*` transition
//! handing out a ticket, and a `finish_*`/`abort_*` one taking it back.
//! Tickets are tagged with the batch generation: results for a batch that has since been
//! cancelled or replaced are ignored.
use std::fmt;

use log::{debug, info, warn};

use crate::error::Error;
use crate::filtering::FilterOutcome;
use crate::lang::Lang;
use crate::remote::SubmissionResponse;
use crate::review::{CandidatePool, ReviewBatchResult};
use crate::submission::SubmissionSummary;

/// Operations that cannot overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Ingestion,
    Review,
    Submission,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Ingestion => f.write_str("ingestion"),
            Operation::Review => f.write_str("review"),
            Operation::Submission => f.write_str("submission"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// nothing loaded.
    Idle,
    /// candidates are loaded and can be reviewed or submitted.
    AwaitingConfirmation,
    Reviewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Submitted,
    Unreviewed,
    Reviewing,
    Validated,
    Invalidated,
    Filtered,
    Existing,
}

/// Pools a review can be started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSource {
    /// freshly submitted sentences that passed the filters.
    Unreviewed,
    /// sentences that were too long.
    Filtered,
}

impl From<ReviewSource> for Pool {
    fn from(source: ReviewSource) -> Self {
        match source {
            ReviewSource::Unreviewed => Pool::Unreviewed,
            ReviewSource::Filtered => Pool::Filtered,
        }
    }
}

/// Identifies a review started by [PipelineState::start_review].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewToken {
    generation: u64,
    review: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveReview {
    token: ReviewToken,
    source: ReviewSource,
}

/// Raw text waiting to be segmented and filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestTicket {
    generation: u64,
    language: Lang,
    text: String,
}

impl IngestTicket {
    pub fn language(&self) -> &Lang {
        &self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Sentences waiting to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    language: Lang,
    sentences: Vec<String>,
}

impl SubmissionTicket {
    pub fn language(&self) -> &Lang {
        &self.language
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    generation: u64,
    language: Option<Lang>,

    submitted: CandidatePool,
    unreviewed: CandidatePool,
    reviewing: CandidatePool,
    validated: CandidatePool,
    invalidated: CandidatePool,
    filtered: CandidatePool,
    existing: CandidatePool,

    reviews: u64,
    review: Option<ActiveReview>,
    pending: Option<Operation>,

    message: String,
    error: String,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state for a new batch.
    ///
    /// The generation is bumped so that tickets of the previous batch become stale.
    fn reset(&self) -> Self {
        Self {
            generation: self.generation + 1,
            ..Default::default()
        }
    }

    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    fn is_current(&self, generation: u64, operation: Operation) -> bool {
        let current = self.generation == generation && self.pending == Some(operation);
        if !current {
            debug!(
                "ignoring stale {operation} result (batch {generation}, current batch {})",
                self.generation
            );
        }
        current
    }

    fn ensure_idle(&self) -> Result<(), Error> {
        match (self.pending, self.review) {
            (Some(op), _) => Err(Error::Busy(op)),
            (None, Some(_)) => Err(Error::Busy(Operation::Review)),
            (None, None) => Ok(()),
        }
    }

    pub fn status(&self) -> Status {
        if self.review.is_some() {
            Status::Reviewing
        } else if [
            &self.unreviewed,
            &self.validated,
            &self.invalidated,
            &self.filtered,
        ]
        .iter()
        .any(|pool| !pool.is_empty())
        {
            Status::AwaitingConfirmation
        } else {
            Status::Idle
        }
    }

    pub fn pool(&self, pool: Pool) -> &CandidatePool {
        match pool {
            Pool::Submitted => &self.submitted,
            Pool::Unreviewed => &self.unreviewed,
            Pool::Reviewing => &self.reviewing,
            Pool::Validated => &self.validated,
            Pool::Invalidated => &self.invalidated,
            Pool::Filtered => &self.filtered,
            Pool::Existing => &self.existing,
        }
    }

    /// Size of a pool as shown to the user.
    ///
    /// The pool a review was started from shows as empty until the review completes.
    pub fn visible_count(&self, pool: Pool) -> usize {
        match self.review {
            Some(active) if Pool::from(active.source) == pool => 0,
            _ => self.pool(pool).len(),
        }
    }

    /// Sentences that would be submitted: unreviewed then validated ones.
    pub fn ready(&self) -> Vec<String> {
        let mut ready = self.unreviewed.clone();
        ready.merge(self.validated.iter().cloned());
        ready.into_vec()
    }

    pub fn language(&self) -> Option<&Lang> {
        self.language.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Batch generation, bumped on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop everything, without any message.
    pub fn cancel(&self) -> Self {
        info!("cancelling batch {}", self.generation);
        self.reset()
    }

    /// State to show after `error` interrupted the current batch.
    ///
    /// Busy errors leave the in-flight operation untouched.
    pub fn reject(&self, error: &Error) -> Self {
        match error {
            Error::Busy(_) => self.clone(),
            Error::StaleReview | Error::InvalidReview(_) => self.clone().with_error(error.to_string()),
            Error::Validation(message) => self.reset().with_message(message.clone()),
            error => self.reset().with_error(error.to_string()),
        }
    }

    /// Start a new batch from raw text. Any previous batch is discarded.
    pub fn begin_ingestion(&self, language: &str, raw: &str) -> Result<(Self, IngestTicket), Error> {
        if let Some(op) = self.pending {
            return Err(Error::Busy(op));
        }

        let language = Lang::new(language)?;
        if raw.trim().is_empty() {
            return Err(Error::Validation("Please add sentences.".to_string()));
        }

        let mut next = self.reset();
        next.language = Some(language.clone());
        next.pending = Some(Operation::Ingestion);

        let ticket = IngestTicket {
            generation: next.generation,
            language,
            text: raw.to_string(),
        };
        Ok((next, ticket))
    }

    /// Load filtered candidates. `submitted` are all the segmented sentences.
    pub fn finish_ingestion(
        &self,
        ticket: &IngestTicket,
        submitted: Vec<String>,
        outcome: FilterOutcome,
    ) -> Self {
        if !self.is_current(ticket.generation, Operation::Ingestion) {
            return self.clone();
        }

        info!(
            "{}: {} sentences found, {} unreviewed, {} too long, {} existing",
            ticket.language,
            submitted.len(),
            outcome.valid.len(),
            outcome.filtered.len(),
            outcome.existing.len()
        );

        Self {
            generation: self.generation,
            language: Some(ticket.language.clone()),
            submitted: submitted.into(),
            unreviewed: outcome.valid.into(),
            filtered: outcome.filtered.into(),
            existing: outcome.existing.into(),
            ..Default::default()
        }
    }

    /// Abort the ingestion because of `error` (a failed corpus lookup).
    pub fn abort_ingestion(&self, ticket: &IngestTicket, error: &Error) -> Self {
        if !self.is_current(ticket.generation, Operation::Ingestion) {
            return self.clone();
        }
        self.reject(error)
    }

    /// Put the content of `source` under review.
    ///
    /// Returns no token (and an unchanged state) if the source pool is empty.
    pub fn start_review(&self, source: ReviewSource) -> Result<(Self, Option<ReviewToken>), Error> {
        self.ensure_idle()?;

        let sentences = self.pool(source.into());
        if sentences.is_empty() {
            return Ok((self.clone(), None));
        }

        let mut next = self.clone();
        next.reviews += 1;
        let token = ReviewToken {
            generation: next.generation,
            review: next.reviews,
        };
        next.reviewing = sentences.clone();
        next.review = Some(ActiveReview { token, source });

        debug!("reviewing {} sentences from {source:?}", next.reviewing.len());
        Ok((next, Some(token)))
    }

    /// Apply the result of the review identified by `token`.
    ///
    /// Fails on unknown or already completed reviews, and on results that
    /// do not account for exactly the sentences under review.
    pub fn complete_review(
        &self,
        token: &ReviewToken,
        result: &ReviewBatchResult,
    ) -> Result<Self, Error> {
        match self.review {
            Some(active) if active.token == *token => (),
            _ => return Err(Error::StaleReview),
        }
        result.check_against(&self.reviewing)?;

        Ok(self.apply_review(result))
    }

    /// Merge a review result into the cumulative pools.
    ///
    /// Applying the same result twice gives the same state as applying it once.
    pub(crate) fn apply_review(&self, result: &ReviewBatchResult) -> Self {
        if let Some(ActiveReview {
            source: ReviewSource::Filtered,
            ..
        }) = self.review
        {
            let dropped = self
                .unreviewed
                .iter()
                .filter(|sentence| !result.unreviewed.contains(sentence))
                .count();
            if dropped > 0 {
                warn!("review of filtered sentences replaced {dropped} unreviewed sentences");
            }
        }

        let mut next = self.clone();
        next.reviewing = CandidatePool::new();
        next.review = None;

        next.validated.merge(result.validated.iter().cloned());
        next.invalidated.remove_all(&result.validated);

        next.invalidated.merge(result.invalidated.iter().cloned());
        next.validated.remove_all(&result.invalidated);

        let mut unreviewed: CandidatePool = result.unreviewed.iter().cloned().collect();
        unreviewed.remove_all(next.validated.as_slice());
        next.unreviewed = unreviewed;

        debug!(
            "review merged: {} unreviewed, {} validated, {} invalidated",
            next.unreviewed.len(),
            next.validated.len(),
            next.invalidated.len()
        );
        next
    }

    /// Freeze the ready sentences for submission.
    pub fn begin_submission(&self) -> Result<(Self, SubmissionTicket), Error> {
        self.ensure_idle()?;

        let language = self
            .language
            .clone()
            .ok_or_else(|| Error::Validation("Please select a language.".to_string()))?;
        let sentences = self.ready();
        if sentences.is_empty() {
            return Err(Error::Validation(
                "No sentences ready for submission.".to_string(),
            ));
        }

        let mut next = self.clone();
        next.pending = Some(Operation::Submission);
        let ticket = SubmissionTicket {
            generation: next.generation,
            language,
            sentences,
        };
        Ok((next, ticket))
    }

    /// Batch was submitted: reset and report.
    pub fn finish_submission(&self, ticket: &SubmissionTicket, response: &SubmissionResponse) -> Self {
        if !self.is_current(ticket.generation, Operation::Submission) {
            return self.clone();
        }

        let summary = SubmissionSummary::from(response);
        info!(
            "{}: {} sentences accepted, {} failed",
            ticket.language, summary.accepted, summary.errors
        );
        self.reset()
            .with_message(summary.message().unwrap_or_default())
            .with_error(summary.error_message().unwrap_or_default())
    }

    /// Submission failed: the batch is discarded.
    pub fn abort_submission(&self, ticket: &SubmissionTicket, error: &Error) -> Self {
        if !self.is_current(ticket.generation, Operation::Submission) {
            return self.clone();
        }
        match error {
            Error::Submission(_) => self.reject(error),
            e => self.reset().with_error(format!("Submission error: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::ErrorDetail;

    fn strings(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_string()).collect()
    }

    /// state after ingesting `valid` and `filtered` sentences.
    fn loaded(valid: &[&str], filtered: &[&str]) -> PipelineState {
        let (state, ticket) = PipelineState::new()
            .begin_ingestion("en", "raw text")
            .unwrap();
        let submitted: Vec<String> = strings(valid).into_iter().chain(strings(filtered)).collect();
        state.finish_ingestion(
            &ticket,
            submitted,
            FilterOutcome {
                valid: strings(valid),
                filtered: strings(filtered),
                existing: Vec::new(),
            },
        )
    }

    #[test]
    fn new_state_is_idle() {
        let state = PipelineState::new();
        assert_eq!(state.status(), Status::Idle);
        assert!(state.ready().is_empty());
    }

    #[test]
    fn ingestion_validation() {
        let state = PipelineState::new();
        assert!(matches!(
            state.begin_ingestion("", "Hello."),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            state.begin_ingestion("en", "  \n "),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn rejected_validation_resets_with_message() {
        let state = loaded(&["One."], &[]);
        let err = state.begin_ingestion("", "Hello.").unwrap_err();
        let state = state.reject(&err);
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.message(), "Please select a language.");
    }

    #[test]
    fn ingestion_loads_pools() {
        let state = loaded(&["One.", "Two."], &["Long."]);
        assert_eq!(state.status(), Status::AwaitingConfirmation);
        assert_eq!(state.pool(Pool::Unreviewed).as_slice(), &["One.", "Two."]);
        assert_eq!(state.pool(Pool::Filtered).as_slice(), &["Long."]);
        assert_eq!(state.pool(Pool::Submitted).len(), 3);
        assert_eq!(state.ready(), strings(&["One.", "Two."]));
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn second_ingestion_while_pending_is_busy() {
        let (state, _) = PipelineState::new().begin_ingestion("en", "One.").unwrap();
        assert!(matches!(
            state.begin_ingestion("en", "Two."),
            Err(Error::Busy(Operation::Ingestion))
        ));
    }

    #[test]
    fn cancelled_ingestion_result_is_ignored() {
        let (state, ticket) = PipelineState::new().begin_ingestion("en", "One.").unwrap();
        let cancelled = state.cancel();
        let after = cancelled.finish_ingestion(
            &ticket,
            strings(&["One."]),
            FilterOutcome {
                valid: strings(&["One."]),
                ..Default::default()
            },
        );
        assert_eq!(after, cancelled);
        assert_eq!(after.status(), Status::Idle);
    }

    #[test]
    fn replaced_batch_result_is_ignored() {
        let (first, old_ticket) = PipelineState::new().begin_ingestion("en", "One.").unwrap();
        let first = first.abort_ingestion(&old_ticket, &Error::lookup(Error::Custom("down".into())));
        let (second, _) = first.begin_ingestion("en", "Two.").unwrap();

        let after = second.finish_ingestion(&old_ticket, strings(&["One."]), Default::default());
        assert_eq!(after, second);
    }

    #[test]
    fn lookup_failure_resets_with_error() {
        let (state, ticket) = PipelineState::new().begin_ingestion("en", "One.").unwrap();
        let state = state.abort_ingestion(&ticket, &Error::lookup(Error::Custom("down".into())));
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.pending(), None);
        assert!(state.error().contains("down"));
    }

    #[test]
    fn review_of_empty_pool_is_a_noop() {
        let state = loaded(&["One."], &[]);
        let (next, token) = state.start_review(ReviewSource::Filtered).unwrap();
        assert!(token.is_none());
        assert_eq!(next, state);
    }

    #[test]
    fn review_hides_source_pool() {
        let state = loaded(&["One.", "Two."], &[]);
        let (state, token) = state.start_review(ReviewSource::Unreviewed).unwrap();
        assert!(token.is_some());
        assert_eq!(state.status(), Status::Reviewing);
        assert_eq!(state.visible_count(Pool::Unreviewed), 0);
        assert_eq!(state.visible_count(Pool::Reviewing), 2);
        assert!(matches!(
            state.start_review(ReviewSource::Unreviewed),
            Err(Error::Busy(Operation::Review))
        ));
        assert!(matches!(
            state.begin_submission(),
            Err(Error::Busy(Operation::Review))
        ));
    }

    #[test]
    fn complete_review_merges() {
        let state = loaded(&["One.", "Two.", "Three."], &[]);
        let (state, token) = state.start_review(ReviewSource::Unreviewed).unwrap();
        let token = token.unwrap();

        let result = ReviewBatchResult {
            unreviewed: strings(&["Three."]),
            validated: strings(&["One."]),
            invalidated: strings(&["Two."]),
        };
        let state = state.complete_review(&token, &result).unwrap();

        assert_eq!(state.status(), Status::AwaitingConfirmation);
        assert!(state.pool(Pool::Reviewing).is_empty());
        assert_eq!(state.pool(Pool::Unreviewed).as_slice(), &["Three."]);
        assert_eq!(state.pool(Pool::Validated).as_slice(), &["One."]);
        assert_eq!(state.pool(Pool::Invalidated).as_slice(), &["Two."]);
        assert_eq!(state.ready(), strings(&["Three.", "One."]));

        // the same completion cannot be applied twice
        assert!(matches!(
            state.complete_review(&token, &result),
            Err(Error::StaleReview)
        ));
    }

    #[test]
    fn malformed_review_is_rejected() {
        let state = loaded(&["One.", "Two."], &[]);
        let (state, token) = state.start_review(ReviewSource::Unreviewed).unwrap();
        let result = ReviewBatchResult {
            validated: strings(&["One."]),
            ..Default::default()
        };
        assert!(matches!(
            state.complete_review(&token.unwrap(), &result),
            Err(Error::InvalidReview(_))
        ));
    }

    #[test]
    fn applying_a_review_twice_is_idempotent() {
        let state = loaded(&["One.", "Two.", "Three."], &[]);
        let result = ReviewBatchResult {
            unreviewed: strings(&["Three."]),
            validated: strings(&["One."]),
            invalidated: strings(&["Two."]),
        };
        let once = state.apply_review(&result);
        let twice = once.apply_review(&result);
        assert_eq!(once, twice);
    }

    #[test]
    fn reconsidered_sentence_changes_pool() {
        let state = loaded(&["One.", "Two."], &[]);
        let (state, token) = state.start_review(ReviewSource::Unreviewed).unwrap();
        let state = state
            .complete_review(
                &token.unwrap(),
                &ReviewBatchResult {
                    unreviewed: strings(&["Two."]),
                    validated: strings(&["One."]),
                    ..Default::default()
                },
            )
            .unwrap();

        // a later pass rejects One.
        let state = state.apply_review(&ReviewBatchResult {
            invalidated: strings(&["One."]),
            unreviewed: strings(&["Two."]),
            ..Default::default()
        });
        assert!(state.pool(Pool::Validated).is_empty());
        assert_eq!(state.pool(Pool::Invalidated).as_slice(), &["One."]);
    }

    #[test]
    fn reviewing_filtered_keeps_filtered() {
        let state = loaded(&[], &["Long sentence."]);
        assert!(state.ready().is_empty());

        let (state, token) = state.start_review(ReviewSource::Filtered).unwrap();
        assert_eq!(state.visible_count(Pool::Filtered), 0);
        let state = state
            .complete_review(
                &token.unwrap(),
                &ReviewBatchResult {
                    validated: strings(&["Long sentence."]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(state.pool(Pool::Validated).as_slice(), &["Long sentence."]);
        assert_eq!(state.pool(Pool::Filtered).as_slice(), &["Long sentence."]);
        assert_eq!(state.visible_count(Pool::Filtered), 1);
        assert_eq!(state.ready().len(), 1);
    }

    #[test]
    fn deferring_a_validated_sentence_keeps_it_validated() {
        let state = loaded(&[], &["Long sentence."]);

        let (state, token) = state.start_review(ReviewSource::Filtered).unwrap();
        let state = state
            .complete_review(
                &token.unwrap(),
                &ReviewBatchResult {
                    validated: strings(&["Long sentence."]),
                    ..Default::default()
                },
            )
            .unwrap();

        let (state, token) = state.start_review(ReviewSource::Filtered).unwrap();
        let state = state
            .complete_review(
                &token.unwrap(),
                &ReviewBatchResult {
                    unreviewed: strings(&["Long sentence."]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(!state.pool(Pool::Unreviewed).contains("Long sentence."));
        assert!(state.pool(Pool::Validated).contains("Long sentence."));
        assert_eq!(state.ready(), strings(&["Long sentence."]));
    }

    #[test]
    fn filtered_review_replaces_unreviewed() {
        let state = loaded(&["Short one."], &["Long sentence."]);

        let (state, token) = state.start_review(ReviewSource::Filtered).unwrap();
        let state = state
            .complete_review(
                &token.unwrap(),
                &ReviewBatchResult {
                    validated: strings(&["Long sentence."]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(state.pool(Pool::Unreviewed).is_empty());
        assert_eq!(state.ready(), strings(&["Long sentence."]));
    }

    #[test]
    fn stale_review_after_cancel() {
        let state = loaded(&["One."], &[]);
        let (state, token) = state.start_review(ReviewSource::Unreviewed).unwrap();
        let state = state.cancel();
        assert!(matches!(
            state.complete_review(&token.unwrap(), &ReviewBatchResult::default()),
            Err(Error::StaleReview)
        ));
    }

    #[test]
    fn submission_success() {
        let state = loaded(&["One.", "Two."], &[]);
        let (state, ticket) = state.begin_submission().unwrap();
        assert_eq!(ticket.sentences(), &["One.", "Two."]);
        assert!(matches!(
            state.begin_submission(),
            Err(Error::Busy(Operation::Submission))
        ));

        let response = SubmissionResponse {
            sentences: strings(&["One."]),
            errors: vec![ErrorDetail {
                sentence: "Two.".to_string(),
                error: "duplicate".to_string(),
            }],
        };
        let state = state.finish_submission(&ticket, &response);
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.message(), "Submitted 1 sentences.");
        assert_eq!(state.error(), "1 sentences failed");
    }

    #[test]
    fn submission_failure_discards_batch() {
        let state = loaded(&["One."], &[]);
        let (state, ticket) = state.begin_submission().unwrap();
        let state = state.abort_submission(&ticket, &Error::Custom("timeout".to_string()));
        assert_eq!(state.status(), Status::Idle);
        assert!(state.ready().is_empty());
        assert_eq!(state.error(), "Submission error: timeout");
    }

    #[test]
    fn nothing_to_submit() {
        let state = loaded(&[], &["Long."]);
        assert!(matches!(state.begin_submission(), Err(Error::Validation(_))));
        assert!(matches!(
            PipelineState::new().begin_submission(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn cancel_clears_everything() {
        let state = loaded(&["One."], &["Long."]).with_message("hello");
        let state = state.cancel();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.message(), "");
        for pool in [
            Pool::Submitted,
            Pool::Unreviewed,
            Pool::Reviewing,
            Pool::Validated,
            Pool::Invalidated,
            Pool::Filtered,
            Pool::Existing,
        ] {
            assert!(state.pool(pool).is_empty());
        }
    }
}
