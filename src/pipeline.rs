//! Sentence collection pipeline.
//!
//! A [Collector] owns the current [PipelineState] and drives it
//! with its segmenter, corpus store and submission endpoint:
//!
//! 1. [Collector::add] normalizes, segments and filters raw text,
//! 1. [Collector::start_review]/[Collector::complete_review] run review sessions,
//! 1. [Collector::confirm] submits the ready sentences, [Collector::cancel] drops them.
//!
//! Each step runs to completion before the next one can start.
use log::{debug, warn};

use crate::error::Error;
use crate::filtering::{filter_candidates, WordCount};
use crate::normalize::{has_separators, normalize, punctuate_last_row};
use crate::remote::{CorpusStore, SubmissionEndpoint};
use crate::review::ReviewBatchResult;
use crate::segmentation::{CrossChecked, PunktSegmenter, RuleSegmenter, SentenceSegmenter};
use crate::state::{PipelineState, ReviewSource, ReviewToken};
use crate::submission::{self, SubmissionSummary};
use crate::tokenize::{UnicodeWords, WordTokenizer};

/// Tunables of a [Collector].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorConfig {
    /// sentences with more words are filtered out.
    pub max_words: usize,
    /// run the rule-based segmenter next to the trained one and log disagreements.
    pub cross_check: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_words: crate::filtering::sentence::MAX_WORDS,
            cross_check: true,
        }
    }
}

pub struct Collector<'s, C, E, T = UnicodeWords> {
    state: PipelineState,
    segmenter: Box<dyn SentenceSegmenter + 's>,
    length: WordCount<T>,
    store: C,
    endpoint: E,
}

impl<C, E> Collector<'static, C, E>
where
    C: CorpusStore,
    E: SubmissionEndpoint,
{
    /// Collector using the English boundary model.
    pub fn new(store: C, endpoint: E, config: CollectorConfig) -> Self {
        let primary = PunktSegmenter::english();
        if config.cross_check {
            Self::with_segmenter(
                store,
                endpoint,
                CrossChecked::new(primary, RuleSegmenter),
                config,
            )
        } else {
            Self::with_segmenter(store, endpoint, primary, config)
        }
    }
}

impl<'s, C, E> Collector<'s, C, E>
where
    C: CorpusStore,
    E: SubmissionEndpoint,
{
    /// Collector using a custom segmenter.
    ///
    /// `config.cross_check` is ignored: wrap the segmenter in a [CrossChecked] instead.
    pub fn with_segmenter<S>(store: C, endpoint: E, segmenter: S, config: CollectorConfig) -> Self
    where
        S: SentenceSegmenter + 's,
    {
        Self {
            state: PipelineState::new(),
            segmenter: Box::new(segmenter),
            length: WordCount::with_max_words(config.max_words),
            store,
            endpoint,
        }
    }
}

impl<'s, C, E, T> Collector<'s, C, E, T>
where
    C: CorpusStore,
    E: SubmissionEndpoint,
    T: WordTokenizer + Default,
{
    /// Count words with `tokenizer` instead, keeping the word cap.
    pub fn with_tokenizer<U>(self, tokenizer: U) -> Collector<'s, C, E, U>
    where
        U: WordTokenizer + Default,
    {
        Collector {
            state: self.state,
            segmenter: self.segmenter,
            length: WordCount::new(*self.length.max_words(), tokenizer),
            store: self.store,
            endpoint: self.endpoint,
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    /// Normalize and segment raw text. Pieces without any word are dropped.
    pub fn parse(&self, raw: &str) -> Vec<String> {
        let normalized = normalize(raw);
        let mut sentences = self.segmenter.segment(&normalized);
        sentences.retain(|sentence| self.length.count(sentence) > 0);
        if has_separators(raw) {
            punctuate_last_row(&mut sentences);
        }
        debug!("{} sentences found", sentences.len());
        sentences
    }

    /// Load a new batch of raw text, replacing the current one.
    ///
    /// On failure the state is reset and carries a message describing the error.
    pub async fn add(&mut self, language: &str, raw: &str) -> Result<&PipelineState, Error> {
        let (state, ticket) = match self.state.begin_ingestion(language, raw) {
            Ok(started) => started,
            Err(e) => {
                self.state = self.state.reject(&e);
                return Err(e);
            }
        };
        self.state = state;

        let submitted = self.parse(ticket.text());
        match filter_candidates(ticket.language(), &submitted, &self.store, &self.length).await {
            Ok(outcome) => {
                self.state = self.state.finish_ingestion(&ticket, submitted, outcome);
                Ok(&self.state)
            }
            Err(e) => {
                warn!("{}: {e}", ticket.language());
                self.state = self.state.abort_ingestion(&ticket, &e);
                Err(e)
            }
        }
    }

    /// Put a pool under review. Returns `None` if the pool is empty.
    pub fn start_review(&mut self, source: ReviewSource) -> Result<Option<ReviewToken>, Error> {
        let (state, token) = self.state.start_review(source)?;
        self.state = state;
        Ok(token)
    }

    pub fn complete_review(
        &mut self,
        token: &ReviewToken,
        result: &ReviewBatchResult,
    ) -> Result<&PipelineState, Error> {
        self.state = self.state.complete_review(token, result)?;
        Ok(&self.state)
    }

    /// Submit the ready sentences. The batch is discarded whatever the outcome.
    pub async fn confirm(&mut self) -> Result<SubmissionSummary, Error> {
        let (state, ticket) = match self.state.begin_submission() {
            Ok(started) => started,
            Err(e) => {
                self.state = self.state.reject(&e);
                return Err(e);
            }
        };
        self.state = state;

        match submission::submit(ticket.language(), ticket.sentences(), &self.endpoint).await {
            Ok(response) => {
                self.state = self.state.finish_submission(&ticket, &response);
                Ok(SubmissionSummary::from(&response))
            }
            Err(e) => {
                self.state = self.state.abort_submission(&ticket, &e);
                Err(e)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.state = self.state.cancel();
    }
}
