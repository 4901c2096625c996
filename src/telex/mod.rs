//! Telex decomposition of Vietnamese syllables.
//!
//! Telex is a transliteration scheme that writes accented Vietnamese letters
//! with unaccented Latin letters plus marker letters for the tone and the
//! vowel-quality modification. This module decomposes a precomposed (NFC)
//! syllable into its telex components, which is the representation the
//! similarity heuristics compare.

pub mod decompose;
pub mod tables;

// Re-export commonly used types
pub use decompose::*;
pub use tables::*;
