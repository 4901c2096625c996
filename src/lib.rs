//! # Nhamlan
//!
//! An offline confusion-set builder for Vietnamese syllables.
//!
//! For every word in a vocabulary, nhamlan computes the list of other
//! vocabulary words a spelling-correction system should consider plausible
//! near-matches. Words are first decomposed into a telex representation
//! (unaccented base skeleton, tone marker, vowel modifier marker); pairs are
//! then compared with a bounded edit distance over that representation.
//!
//! ## Pipeline
//!
//! ```text
//! word list -> telex decomposition -> all-pairs similarity -> confusion set
//! ```
//!
//! The all-pairs comparison is O(n²) in vocabulary size and is parallelized
//! across the outer loop with rayon.

pub mod cli;
pub mod confusion;
pub mod error;
pub mod persist;
pub mod similarity;
pub mod telex;
pub mod vocab;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
