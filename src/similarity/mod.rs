//! Similarity heuristics over telex decompositions.
//!
//! The distance between two decompositions is a string edit distance on the
//! base skeletons plus fixed penalties for tone and modifier mismatches. The
//! confusion-set builder takes any [`ConfusionHeuristic`], so other similarity
//! functions can be plugged in without touching the builder.

pub mod heuristic;
pub mod levenshtein;

// Re-export commonly used types
pub use heuristic::*;
pub use levenshtein::*;
