//! Confusion-set construction.
//!
//! A confusion set maps every vocabulary word to the ordered list of other
//! vocabulary words a correction system should consider plausible
//! substitutions. Construction is an all-pairs comparison over the decomposed
//! vocabulary, parallelized across the outer loop.

pub mod builder;
pub mod set;

// Re-export commonly used types
pub use builder::*;
pub use set::*;
