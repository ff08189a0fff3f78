//! Partitioning of sentence candidates.
//!
//! Candidates are split into
//! - `filtered`: too many words,
//! - `existing`: already known by the corpus store,
//! - `valid`: everything else.
//!
//! `filtered` and `existing` are decided independently: a sentence that is both too long
//! and already known appears in both.
use log::debug;

use super::{Filter, WordCount};
use crate::error::Error;
use crate::lang::Lang;
use crate::remote::CorpusStore;
use crate::tokenize::WordTokenizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub valid: Vec<String>,
    pub filtered: Vec<String>,
    pub existing: Vec<String>,
}

/// Partition `candidates`, keeping their order.
///
/// The corpus store is queried once, with every candidate (long ones included).
/// Store failures are returned as [Error::Lookup].
pub async fn filter_candidates<C, T>(
    lang: &Lang,
    candidates: &[String],
    store: &C,
    length: &WordCount<T>,
) -> Result<FilterOutcome, Error>
where
    C: CorpusStore,
    T: WordTokenizer + Default,
{
    let (valid, filtered): (Vec<&String>, Vec<&String>) = candidates
        .iter()
        .partition(|sentence| length.detect(sentence.as_str()));

    let existing: Vec<String> = store
        .validate_sentences(lang, candidates)
        .await
        .map_err(Error::lookup)?
        .into_iter()
        .map(|e| e.sentence)
        .collect();

    let valid: Vec<String> = valid
        .into_iter()
        .filter(|sentence| !existing.contains(*sentence))
        .cloned()
        .collect();

    debug!(
        "{lang}: {} candidates, {} valid, {} too long, {} existing",
        candidates.len(),
        valid.len(),
        filtered.len(),
        existing.len()
    );

    Ok(FilterOutcome {
        valid,
        filtered: filtered.into_iter().cloned().collect(),
        existing,
    })
}

#[cfg(test)]
mod tests {
    use super::filter_candidates;
    use crate::error::Error;
    use crate::filtering::sentence::MAX_WORDS;
    use crate::filtering::WordCount;
    use crate::lang::Lang;
    use crate::remote::MemoryCorpusStore;

    fn long_sentence() -> String {
        format!("{}.", vec!["word"; 20].join(" "))
    }

    #[tokio::test]
    async fn partition_keeps_order() {
        let en = Lang::new("en").unwrap();
        let store = MemoryCorpusStore::new();
        store.insert(&en, ["Known one."]).unwrap();

        let candidates = vec![
            "First new.".to_string(),
            long_sentence(),
            "Known one.".to_string(),
            "Second new.".to_string(),
        ];
        let outcome = filter_candidates(&en, &candidates, &store, &WordCount::with_max_words(MAX_WORDS))
            .await
            .unwrap();

        assert_eq!(outcome.valid, vec!["First new.", "Second new."]);
        assert_eq!(outcome.filtered, vec![long_sentence()]);
        assert_eq!(outcome.existing, vec!["Known one."]);
    }

    #[tokio::test]
    async fn long_and_existing_is_reported_twice() {
        let en = Lang::new("en").unwrap();
        let store = MemoryCorpusStore::new();
        store.insert(&en, [long_sentence()]).unwrap();

        let candidates = vec![long_sentence(), "Short.".to_string()];
        let outcome = filter_candidates(&en, &candidates, &store, &WordCount::with_max_words(MAX_WORDS))
            .await
            .unwrap();

        assert_eq!(outcome.valid, vec!["Short."]);
        assert_eq!(outcome.filtered, vec![long_sentence()]);
        assert_eq!(outcome.existing, vec![long_sentence()]);
    }

    #[tokio::test]
    async fn every_candidate_is_accounted_for() {
        let en = Lang::new("en").unwrap();
        let store = MemoryCorpusStore::new();
        store.insert(&en, ["b.", "d."]).unwrap();

        let candidates: Vec<String> = ["a.", "b.", "c.", "d."].iter().map(|s| s.to_string()).collect();
        let outcome = filter_candidates(&en, &candidates, &store, &WordCount::with_max_words(0))
            .await
            .unwrap();

        // every sentence has one word: all too long with a cap of 0
        assert!(outcome.valid.is_empty());
        assert_eq!(outcome.filtered, candidates);
        assert_eq!(outcome.existing, vec!["b.", "d."]);

        let outcome = filter_candidates(&en, &candidates, &store, &WordCount::with_max_words(MAX_WORDS))
            .await
            .unwrap();
        let mut all: Vec<&String> = outcome
            .valid
            .iter()
            .chain(&outcome.filtered)
            .chain(&outcome.existing)
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all, candidates.iter().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn store_failure_is_a_lookup_error() {
        let en = Lang::new("en").unwrap();
        let candidates = vec!["Hi.".to_string()];
        let result = filter_candidates(
            &en,
            &candidates,
            &MemoryCorpusStore::unavailable(),
            &WordCount::with_max_words(MAX_WORDS),
        )
        .await;
        assert!(matches!(result, Err(Error::Lookup(_))));
    }
}
