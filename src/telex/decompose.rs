//! Decomposition of a syllable into its telex components.

use serde::{Deserialize, Serialize};

use crate::telex::tables::{AccentPattern, DOUBLE_PATTERNS, SINGLE_PATTERNS, TONE_MARKERS};

/// The telex components of a syllable.
///
/// A decomposition is produced once per word and is immutable; it is an
/// intermediate value used for similarity comparison and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    /// The word with its accented vowel cluster replaced by the unaccented
    /// equivalent. May be longer than the word: circumflex-class letters and
    /// đ expand to a doubled base letter ("â" -> "aa", "đ" -> "dd").
    pub base: String,
    /// Tone marker: "", "s", "f", "r", "x" or "j".
    pub diacritic: String,
    /// Vowel modifier marker: "" or "w".
    pub modifier: String,
}

impl Decomposition {
    /// A decomposition with no markers, for a word without accented letters.
    pub fn plain(word: &str) -> Self {
        Decomposition {
            base: word.to_string(),
            diacritic: String::new(),
            modifier: String::new(),
        }
    }
}

/// Decompose a word into its telex components.
///
/// The accent-pattern tiers are scanned in priority order (vowel clusters
/// first, then single letters) and the first pattern contained in the word
/// wins. A word with no accented letters comes back unchanged with empty
/// markers. Decomposition never fails: accented characters outside the fixed
/// tables pass through into `base` verbatim.
pub fn decompose(word: &str) -> Decomposition {
    for entry in DOUBLE_PATTERNS.iter().chain(SINGLE_PATTERNS.iter()) {
        if word.contains(entry.pattern) {
            return apply_pattern(word, entry);
        }
    }
    Decomposition::plain(word)
}

fn apply_pattern(word: &str, entry: &AccentPattern) -> Decomposition {
    // The pattern occurs at most once per syllable; only the first
    // occurrence is replaced.
    let base = word.replacen(entry.pattern, entry.base, 1);

    let mut diacritic = String::new();
    let mut modifier = String::new();
    for mark in entry.marks.chars() {
        if TONE_MARKERS.contains(mark) {
            diacritic.push(mark);
        } else {
            modifier.push(mark);
        }
    }

    Decomposition {
        base,
        diacritic,
        modifier,
    }
}
