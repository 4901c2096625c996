//! Fixed accent-pattern tables for telex decomposition.
//!
//! The tables are split into two priority tiers: multi-letter vowel clusters
//! (the ươ family, which carries a horn on both vowels) are checked before
//! single accented letters, so that a word like "người" resolves to the
//! cluster rather than to one of its letters. Within a tier the order is the
//! fixed order below; first containment match wins.
//!
//! Each entry maps a precomposed pattern to its base replacement plus marker
//! tokens. Circumflex-class marks (â, ê, ô) and đ have no marker token; they
//! are encoded by letter doubling in the base replacement itself.

use lazy_static::lazy_static;

/// The tone-marker alphabet. A marker token in this set is a diacritic
/// (tone) marker; any other token is a vowel modifier marker.
pub const TONE_MARKERS: &str = "sfrxj";

/// One accent pattern and its telex composition.
#[derive(Debug, Clone, Copy)]
pub struct AccentPattern {
    /// Precomposed substring to search for in the word.
    pub pattern: &'static str,
    /// Unaccented replacement for the matched substring.
    pub base: &'static str,
    /// Marker tokens, one character each: tone markers from [`TONE_MARKERS`]
    /// and/or the vowel modifier "w".
    pub marks: &'static str,
}

impl AccentPattern {
    const fn new(pattern: &'static str, base: &'static str, marks: &'static str) -> Self {
        AccentPattern {
            pattern,
            base,
            marks,
        }
    }
}

lazy_static! {
    /// High-priority tier: two-letter vowel clusters.
    pub static ref DOUBLE_PATTERNS: Vec<AccentPattern> = vec![
        AccentPattern::new("ươ", "uo", "w"),
        AccentPattern::new("ướ", "uo", "ws"),
        AccentPattern::new("ườ", "uo", "wf"),
        AccentPattern::new("ưở", "uo", "wr"),
        AccentPattern::new("ưỡ", "uo", "wx"),
        AccentPattern::new("ượ", "uo", "wj"),
    ];

    /// Low-priority tier: single accented letters.
    pub static ref SINGLE_PATTERNS: Vec<AccentPattern> = vec![
        AccentPattern::new("á", "a", "s"),
        AccentPattern::new("à", "a", "f"),
        AccentPattern::new("ạ", "a", "j"),
        AccentPattern::new("ả", "a", "r"),
        AccentPattern::new("ã", "a", "x"),
        AccentPattern::new("â", "aa", ""),
        AccentPattern::new("ấ", "aa", "s"),
        AccentPattern::new("ầ", "aa", "f"),
        AccentPattern::new("ậ", "aa", "j"),
        AccentPattern::new("ẩ", "aa", "r"),
        AccentPattern::new("ẫ", "aa", "x"),
        AccentPattern::new("ă", "a", "w"),
        AccentPattern::new("ắ", "a", "ws"),
        AccentPattern::new("ằ", "a", "wf"),
        AccentPattern::new("ặ", "a", "wj"),
        AccentPattern::new("ẳ", "a", "wr"),
        AccentPattern::new("ẵ", "a", "wx"),
        AccentPattern::new("í", "i", "s"),
        AccentPattern::new("ì", "i", "f"),
        AccentPattern::new("ỉ", "i", "r"),
        AccentPattern::new("ĩ", "i", "x"),
        AccentPattern::new("ị", "i", "j"),
        AccentPattern::new("ú", "u", "s"),
        AccentPattern::new("ù", "u", "f"),
        AccentPattern::new("ủ", "u", "r"),
        AccentPattern::new("ũ", "u", "x"),
        AccentPattern::new("ụ", "u", "j"),
        AccentPattern::new("ư", "u", "w"),
        AccentPattern::new("ứ", "u", "ws"),
        AccentPattern::new("ừ", "u", "wf"),
        AccentPattern::new("ử", "u", "wr"),
        AccentPattern::new("ữ", "u", "wx"),
        AccentPattern::new("ự", "u", "wj"),
        AccentPattern::new("é", "e", "s"),
        AccentPattern::new("è", "e", "f"),
        AccentPattern::new("ẻ", "e", "r"),
        AccentPattern::new("ẽ", "e", "x"),
        AccentPattern::new("ẹ", "e", "j"),
        AccentPattern::new("ê", "ee", ""),
        AccentPattern::new("ế", "ee", "s"),
        AccentPattern::new("ề", "ee", "f"),
        AccentPattern::new("ể", "ee", "r"),
        AccentPattern::new("ễ", "ee", "x"),
        AccentPattern::new("ệ", "ee", "j"),
        AccentPattern::new("ó", "o", "s"),
        AccentPattern::new("ò", "o", "f"),
        AccentPattern::new("ỏ", "o", "r"),
        AccentPattern::new("õ", "o", "x"),
        AccentPattern::new("ọ", "o", "j"),
        AccentPattern::new("ô", "oo", ""),
        AccentPattern::new("ố", "oo", "s"),
        AccentPattern::new("ồ", "oo", "f"),
        AccentPattern::new("ổ", "oo", "r"),
        AccentPattern::new("ỗ", "oo", "x"),
        AccentPattern::new("ộ", "oo", "j"),
        AccentPattern::new("ơ", "o", "w"),
        AccentPattern::new("ớ", "o", "ws"),
        AccentPattern::new("ờ", "o", "wf"),
        AccentPattern::new("ở", "o", "wr"),
        AccentPattern::new("ỡ", "o", "wx"),
        AccentPattern::new("ợ", "o", "wj"),
        AccentPattern::new("đ", "dd", ""),
        AccentPattern::new("ý", "y", "s"),
        AccentPattern::new("ỳ", "y", "f"),
        AccentPattern::new("ỷ", "y", "r"),
        AccentPattern::new("ỹ", "y", "x"),
        AccentPattern::new("ỵ", "y", "j"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_populated() {
        assert_eq!(DOUBLE_PATTERNS.len(), 6);
        assert_eq!(SINGLE_PATTERNS.len(), 67);
    }

    #[test]
    fn test_patterns_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in DOUBLE_PATTERNS.iter().chain(SINGLE_PATTERNS.iter()) {
            assert!(seen.insert(entry.pattern), "duplicate pattern {}", entry.pattern);
        }
    }

    #[test]
    fn test_marks_are_well_formed() {
        for entry in DOUBLE_PATTERNS.iter().chain(SINGLE_PATTERNS.iter()) {
            // At most one tone marker and one modifier marker per pattern.
            let tones = entry.marks.chars().filter(|c| TONE_MARKERS.contains(*c)).count();
            let modifiers = entry.marks.chars().filter(|c| !TONE_MARKERS.contains(*c)).count();
            assert!(tones <= 1, "pattern {} has {} tone markers", entry.pattern, tones);
            assert!(modifiers <= 1, "pattern {} has {} modifiers", entry.pattern, modifiers);
        }
    }
}
