//! Cross-checking of two segmenters.
use std::sync::atomic::{AtomicUsize, Ordering};

use log::warn;

use super::SentenceSegmenter;

/// Runs a secondary segmenter next to the primary one and logs disagreements.
///
/// The primary output is always returned unchanged.
#[derive(Debug)]
pub struct CrossChecked<P, S> {
    primary: P,
    secondary: S,
    discrepancies: AtomicUsize,
}

impl<P, S> CrossChecked<P, S>
where
    P: SentenceSegmenter,
    S: SentenceSegmenter,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self {
            primary,
            secondary,
            discrepancies: AtomicUsize::new(0),
        }
    }

    /// number of texts the two segmenters disagreed on.
    pub fn discrepancies(&self) -> usize {
        self.discrepancies.load(Ordering::Relaxed)
    }
}

impl<P, S> SentenceSegmenter for CrossChecked<P, S>
where
    P: SentenceSegmenter,
    S: SentenceSegmenter,
{
    fn segment(&self, text: &str) -> Vec<String> {
        let primary = self.primary.segment(text);
        let secondary = self.secondary.segment(text);

        if primary != secondary {
            self.discrepancies.fetch_add(1, Ordering::Relaxed);
            warn!(
                "segmenters did not agree: {:?} (primary) vs {:?} (secondary)",
                primary, secondary
            );
        }

        primary
    }
}
