//! Confusability heuristics over decomposed words.

use crate::similarity::levenshtein::levenshtein_distance;
use crate::telex::Decomposition;

/// A pluggable confusability predicate over a pair of decompositions.
///
/// Returns `Some(distance)` when the two words are close enough to be
/// confused, `None` otherwise. Reporting the distance rather than a bare
/// boolean lets the builder rank entries when a confusion list is capped;
/// `is_some()` recovers the plain predicate.
pub trait ConfusionHeuristic {
    fn confusable(&self, a: &Decomposition, b: &Decomposition) -> Option<usize>;
}

impl<F> ConfusionHeuristic for F
where
    F: Fn(&Decomposition, &Decomposition) -> Option<usize>,
{
    fn confusable(&self, a: &Decomposition, b: &Decomposition) -> Option<usize> {
        self(a, b)
    }
}

/// Total distance between two decompositions: Levenshtein distance on the
/// base skeletons, +1 if the tone markers differ, +1 if the modifier markers
/// differ. Symmetric, and zero exactly for equal decompositions.
pub fn decomposition_distance(a: &Decomposition, b: &Decomposition) -> usize {
    let mut distance = levenshtein_distance(&a.base, &b.base);
    if a.diacritic != b.diacritic {
        distance += 1;
    }
    if a.modifier != b.modifier {
        distance += 1;
    }
    distance
}

/// The standard heuristic: confusable when the total decomposition distance
/// is within a fixed threshold.
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceHeuristic {
    threshold: usize,
}

impl EditDistanceHeuristic {
    /// Create a heuristic with the given distance threshold.
    pub fn new(threshold: usize) -> Self {
        EditDistanceHeuristic { threshold }
    }

    /// Preset: at most one edit or marker mismatch.
    pub fn within_1() -> Self {
        EditDistanceHeuristic::new(1)
    }

    /// Preset: at most two edits or marker mismatches combined.
    pub fn within_2() -> Self {
        EditDistanceHeuristic::new(2)
    }

    /// The configured threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for EditDistanceHeuristic {
    fn default() -> Self {
        EditDistanceHeuristic::within_1()
    }
}

impl ConfusionHeuristic for EditDistanceHeuristic {
    fn confusable(&self, a: &Decomposition, b: &Decomposition) -> Option<usize> {
        let distance = decomposition_distance(a, b);
        if distance <= self.threshold {
            Some(distance)
        } else {
            None
        }
    }
}
