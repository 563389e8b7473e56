//! Unigram and bigram frequency counting.
//!
//! Counts are kept in first-seen order so that ties downstream resolve
//! deterministically.

use rustc_hash::FxHashMap;

use crate::pipeline::artifacts::TokenStream;

/// Frequency map that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Maps key -> position in `entries`
    index: FxHashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, inserting it at the end if unseen
    pub fn add(&mut self, key: &str) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: &str, n: usize) {
        if let Some(&idx) = self.index.get(key) {
            self.entries[idx].1 += n;
            return;
        }
        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), n));
    }

    /// Count for `key`, zero if absent
    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.add(key.as_ref());
        }
        table
    }
}

/// Unigram and bigram frequencies of a token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramCounts {
    pub unigrams: FrequencyTable,
    /// Adjacent pairs joined by a single space
    pub bigrams: FrequencyTable,
}

impl NgramCounts {
    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty()
    }
}

/// Count unigrams and bigrams over every segment of `stream`.
///
/// Bigrams are formed from the full filtered sequence of each segment,
/// before any unigram/bigram conflict resolution.
pub fn count(stream: &TokenStream) -> NgramCounts {
    let mut counts = NgramCounts::default();
    for segment in stream.segments() {
        count_segment(segment, &mut counts);
    }
    counts
}

/// Count a single run of tokens.
pub fn count_tokens(tokens: &[String]) -> NgramCounts {
    let mut counts = NgramCounts::default();
    count_segment(tokens, &mut counts);
    counts
}

fn count_segment(tokens: &[String], counts: &mut NgramCounts) {
    for token in tokens {
        counts.unigrams.add(token);
    }
    let mut bigram = String::new();
    for pair in tokens.windows(2) {
        bigram.clear();
        bigram.push_str(&pair[0]);
        bigram.push(' ');
        bigram.push_str(&pair[1]);
        counts.bigrams.add(&bigram);
    }
}
