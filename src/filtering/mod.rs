/*! Filtering utilities

Sentence candidates are filtered in two ways:
- by length, using [sentence::WordCount] (a [filter::Filter] over sentences),
- by existence in the corpus, by asking a [crate::remote::CorpusStore].

[candidates::filter_candidates] does both and partitions the candidates.
! */
pub mod candidates;
mod filter;
pub mod sentence;

pub use candidates::{filter_candidates, FilterOutcome};
pub use filter::Filter;
pub use sentence::WordCount;
