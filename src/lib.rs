//! # Sentence collector
//!
//! Turns raw text into candidate sentences for a crowd-sourced speech corpus:
//! text is normalized, split into sentences, filtered by length and against the sentences
//! the corpus already holds, optionally reviewed, then submitted.
//!
//! [pipeline::Collector] drives the whole process over a [state::PipelineState].
//! The corpus itself is reached through the traits of [remote].
pub mod error;
pub mod filtering;
pub mod lang;
pub mod normalize;
pub mod pipeline;
pub mod remote;
pub mod review;
pub mod segmentation;
pub mod state;
pub mod submission;
pub mod tokenize;
