//! Ordered, duplicate-free collections of sentences.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CandidatePool(Vec<String>);

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sentence` if absent. Returns `true` if it was added.
    pub fn insert(&mut self, sentence: String) -> bool {
        if self.contains(&sentence) {
            false
        } else {
            self.0.push(sentence);
            true
        }
    }

    /// Append every absent sentence, keeping the first-seen order.
    ///
    /// Merging the same sentences twice is the same as merging them once.
    pub fn merge<I>(&mut self, sentences: I)
    where
        I: IntoIterator<Item = String>,
    {
        for sentence in sentences {
            self.insert(sentence);
        }
    }

    /// Remove every sentence contained in `sentences`.
    pub fn remove_all(&mut self, sentences: &[String]) {
        self.0.retain(|s| !sentences.contains(s));
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.0.iter().any(|s| s == sentence)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut pool = Self::new();
        pool.merge(iter);
        pool
    }
}

impl From<Vec<String>> for CandidatePool {
    fn from(sentences: Vec<String>) -> Self {
        sentences.into_iter().collect()
    }
}

impl From<CandidatePool> for Vec<String> {
    fn from(pool: CandidatePool) -> Self {
        pool.0
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
