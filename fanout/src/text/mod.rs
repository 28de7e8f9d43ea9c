//! Word-frequency tokenizer collaborator.
//!
//! Streams a UTF-8 text file line by line and accumulates a
//! [`WordFrequency`] histogram of whitespace-delimited tokens. Tokens are
//! kept exactly as they appear (case- and punctuation-preserving), and the
//! map iterates in first-seen order so reports match the natural
//! accumulation order.

use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Ordered word-occurrence histogram for one text file.
///
/// # Invariant
///
/// The sum of all counts equals the total number of whitespace-delimited
/// tokens seen; iteration order is the first-seen order of each word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    counts: IndexMap<String, u64>,
}

impl WordFrequency {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Total number of tokens recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns the count for a word, or 0 if never seen.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// True when no tokens have been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Builds the word-frequency histogram for a file.
///
/// Reads the file line by line as UTF-8 and splits each line on
/// whitespace. Missing files, permission errors, and invalid UTF-8 all
/// surface as the underlying [`std::io::Error`]; on failure any partial
/// histogram is discarded.
pub fn word_frequency(path: &Path) -> Result<WordFrequency, std::io::Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut frequency = WordFrequency::new();
    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            frequency.record(word);
        }
    }

    debug!(
        path = %path.display(),
        distinct_words = frequency.counts.len(),
        total_tokens = frequency.total(),
        "Tokenized file"
    );
    Ok(frequency)
}
