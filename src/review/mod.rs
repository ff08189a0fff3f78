/*! Review of sentence candidates.

Sentences are kept in duplicate-free [CandidatePool]s.
A reviewer produces a [ReviewBatchResult] for the sentences under review,
either directly or through a [ReviewSession] recording one [ReviewDecision] per sentence.
!*/
mod batch;
mod pool;

pub use batch::{ReviewBatchResult, ReviewDecision, ReviewSession};
pub use pool::CandidatePool;
