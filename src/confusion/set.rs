//! The confusion-set mapping.

use serde::{Deserialize, Serialize};

/// One word and its confusable neighbors, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionEntry {
    /// The vocabulary word.
    pub word: String,
    /// Other vocabulary words confusable with it. May be empty. Never
    /// contains the word itself.
    pub confusable: Vec<String>,
}

/// An ordered mapping from vocabulary words to their confusable neighbors.
///
/// Entry order is the vocabulary order the set was built from, and it is
/// preserved exactly through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfusionSet {
    entries: Vec<ConfusionEntry>,
}

impl ConfusionSet {
    /// Create a confusion set from entries in vocabulary order.
    pub fn from_entries(entries: Vec<ConfusionEntry>) -> Self {
        ConfusionSet { entries }
    }

    /// The entries in vocabulary order.
    pub fn entries(&self) -> &[ConfusionEntry] {
        &self.entries
    }

    /// Look up the confusable words for a word.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.confusable.as_slice())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (word, confusable list) pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.word.as_str(), entry.confusable.as_slice()))
    }

    /// Length of the longest confusable list.
    pub fn max_list_len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.confusable.len())
            .max()
            .unwrap_or(0)
    }

    /// Mean confusable-list length.
    pub fn mean_list_len(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let total: usize = self.entries.iter().map(|entry| entry.confusable.len()).sum();
        total as f64 / self.entries.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfusionSet {
        ConfusionSet::from_entries(vec![
            ConfusionEntry {
                word: "ba".to_string(),
                confusable: vec!["bá".to_string(), "bi".to_string()],
            },
            ConfusionEntry {
                word: "bá".to_string(),
                confusable: vec!["ba".to_string()],
            },
            ConfusionEntry {
                word: "xe".to_string(),
                confusable: vec![],
            },
        ])
    }

    #[test]
    fn test_lookup_and_order() {
        let set = sample();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("ba"), Some(&["bá".to_string(), "bi".to_string()][..]));
        assert_eq!(set.get("xe"), Some(&[][..]));
        assert_eq!(set.get("missing"), None);

        let words: Vec<&str> = set.iter().map(|(word, _)| word).collect();
        assert_eq!(words, vec!["ba", "bá", "xe"]);
    }

    #[test]
    fn test_list_length_stats() {
        let set = sample();
        assert_eq!(set.max_list_len(), 2);
        assert!((set.mean_list_len() - 1.0).abs() < 1e-9);
    }
}
