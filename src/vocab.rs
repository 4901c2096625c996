//! Vocabulary loading and pre-decomposition.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::warn;

use crate::error::Result;
use crate::telex::{Decomposition, decompose};

/// An ordered, deduplicated list of vocabulary words.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Create a vocabulary from words, dropping duplicates while keeping the
    /// first-seen order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = AHashSet::new();
        let mut unique = Vec::new();
        for word in words {
            let word = word.into();
            if seen.insert(word.clone()) {
                unique.push(word);
            }
        }
        Vocabulary { words: unique }
    }

    /// Load a vocabulary from a text file with one word per line.
    ///
    /// Lines are trimmed; lines that are empty after trimming are skipped,
    /// and the number of skipped lines is logged as a warning. Duplicates
    /// collapse to the first occurrence.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        let mut blank_lines = 0usize;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                blank_lines += 1;
                continue;
            }
            words.push(word.to_string());
        }

        if blank_lines > 0 {
            warn!(
                "skipped {} blank line(s) in {}",
                blank_lines,
                path.as_ref().display()
            );
        }

        Ok(Vocabulary::from_words(words))
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// The words in vocabulary order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// A vocabulary with every word decomposed into its telex components,
/// preserving vocabulary order. This is the input the confusion-set builder
/// scans; it is built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DecomposedVocab {
    entries: Vec<(String, Decomposition)>,
    index: AHashMap<String, usize>,
}

impl DecomposedVocab {
    /// Decompose every word of the vocabulary.
    pub fn from_vocabulary(vocab: &Vocabulary) -> Self {
        let entries: Vec<(String, Decomposition)> = vocab
            .iter()
            .map(|word| (word.to_string(), decompose(word)))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (word, _))| (word.clone(), i))
            .collect();
        DecomposedVocab { entries, index }
    }

    /// The (word, decomposition) pairs in vocabulary order.
    pub fn entries(&self) -> &[(String, Decomposition)] {
        &self.entries
    }

    /// Look up the decomposition of a word.
    pub fn get(&self, word: &str) -> Option<&Decomposition> {
        self.index.get(word).map(|&i| &self.entries[i].1)
    }

    /// Number of decomposed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no decomposed words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
