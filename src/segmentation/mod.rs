/*! Sentence boundary detection.

Segmenters implement [SentenceSegmenter].

- [PunktSegmenter] is the one the pipeline trusts. It uses parameters learnt without supervision by [PunktTrainer].
  The English parameters are learnt once per process from an embedded reference text ([struct@ENGLISH]).
- [RuleSegmenter] is a simple rule-based one, only used to cross-check the former (see [CrossChecked]).
!*/
mod cross_check;
mod params;
mod rules;
mod token;
mod tokenizer;
mod trainer;

use lazy_static::lazy_static;
use log::info;

pub use cross_check::CrossChecked;
pub use params::{OrthoContext, PunktParameters};
pub use rules::RuleSegmenter;
pub use tokenizer::PunktSegmenter;
pub use trainer::PunktTrainer;

/// Reference English text the default model is trained on.
pub const REFERENCE_EN: &str = include_str!("../../data/reference_en.txt");

lazy_static! {
    /// English model, trained on first use.
    pub static ref ENGLISH: PunktParameters = {
        let mut trainer = PunktTrainer::new();
        trainer.train(REFERENCE_EN);
        let params = trainer.into_params();
        info!(
            "trained english boundary model ({} abbreviations)",
            params.abbrev_types().len()
        );
        params
    };
}

pub trait SentenceSegmenter {
    /// Split `text` into trimmed, non-empty sentences.
    fn segment(&self, text: &str) -> Vec<String>;
}

impl<S: SentenceSegmenter + ?Sized> SentenceSegmenter for Box<S> {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}

impl<S: SentenceSegmenter + ?Sized> SentenceSegmenter for &S {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}
