//! Parallel all-pairs construction of the confusion set.

use ahash::AHashSet;
use log::info;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::confusion::set::{ConfusionEntry, ConfusionSet};
use crate::error::{NhamlanError, Result};
use crate::similarity::ConfusionHeuristic;
use crate::telex::Decomposition;
use crate::vocab::DecomposedVocab;

/// Builder for confusion sets.
///
/// Runs the O(n²) all-pairs comparison over a decomposed vocabulary. Outer
/// iterations are independent: each word scans the shared read-only
/// vocabulary and produces its own list, so the loop is distributed over a
/// rayon thread pool and the per-word results are collected positionally,
/// with no locking.
#[derive(Debug, Clone, Default)]
pub struct ConfusionSetBuilder {
    max_set: Option<usize>,
    restrict: Option<AHashSet<String>>,
    num_threads: Option<usize>,
}

impl ConfusionSetBuilder {
    /// Create a builder with no cap, no restriction, and one thread per core.
    pub fn new() -> Self {
        ConfusionSetBuilder::default()
    }

    /// Cap every confusion list at the `max_set` entries closest by reported
    /// distance, ties broken by vocabulary order. No cap by default.
    pub fn max_set(mut self, max_set: usize) -> Self {
        self.max_set = Some(max_set);
        self
    }

    /// Restrict output entries to words contained in `keys`. Candidates are
    /// still drawn from the full vocabulary.
    pub fn restrict_to<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restrict = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Number of worker threads. Defaults to the number of logical cores.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Build the confusion set for `vocab` under the given heuristic.
    ///
    /// Entry order and each confusable list follow vocabulary order; a word
    /// never lists itself.
    pub fn build<H>(&self, vocab: &DecomposedVocab, heuristic: &H) -> Result<ConfusionSet>
    where
        H: ConfusionHeuristic + Sync,
    {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.num_threads.unwrap_or_else(num_cpus::get))
            .build()
            .map_err(|e| NhamlanError::other(format!("failed to build thread pool: {e}")))?;

        let keys: Vec<&(String, Decomposition)> = vocab
            .entries()
            .iter()
            .filter(|(word, _)| match &self.restrict {
                Some(restrict) => restrict.contains(word),
                None => true,
            })
            .collect();

        info!(
            "building confusion set: {} word(s), {} candidate(s) each",
            keys.len(),
            vocab.len()
        );

        let entries: Vec<ConfusionEntry> = pool.install(|| {
            keys.par_iter()
                .map(|(word, decomposition)| {
                    let confusable = self.scan_word(word, decomposition, vocab, heuristic);
                    ConfusionEntry {
                        word: word.clone(),
                        confusable,
                    }
                })
                .collect()
        });

        Ok(ConfusionSet::from_entries(entries))
    }

    /// Scan the whole vocabulary for words confusable with `word`.
    fn scan_word<H>(
        &self,
        word: &str,
        decomposition: &Decomposition,
        vocab: &DecomposedVocab,
        heuristic: &H,
    ) -> Vec<String>
    where
        H: ConfusionHeuristic,
    {
        // (distance, vocabulary position, word)
        let mut matches: Vec<(usize, usize, &str)> = Vec::new();
        for (position, (other, other_decomposition)) in vocab.entries().iter().enumerate() {
            if other.as_str() == word {
                continue;
            }
            if let Some(distance) = heuristic.confusable(decomposition, other_decomposition) {
                matches.push((distance, position, other.as_str()));
            }
        }

        if let Some(cap) = self.max_set
            && matches.len() > cap
        {
            // Keep the closest entries, then restore vocabulary order.
            matches.sort_by_key(|&(distance, position, _)| (distance, position));
            matches.truncate(cap);
            matches.sort_by_key(|&(_, position, _)| position);
        }

        matches
            .into_iter()
            .map(|(_, _, other)| other.to_string())
            .collect()
    }
}
