//! Levenshtein distance with a single rolling row.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into another.
/// Transpositions are not considered.
///
/// Runs in O(|s1| * |s2|) time and O(min(|s1|, |s2|)) space: a single row is
/// kept, and the shorter string is always the row dimension.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let mut short: Vec<char> = s1.chars().collect();
    let mut long: Vec<char> = s2.chars().collect();
    if short.len() > long.len() {
        std::mem::swap(&mut short, &mut long);
    }

    if short.is_empty() {
        return long.len();
    }

    // row[i] holds the distance from the first j characters of the long
    // string to the first i characters of the short string.
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (j, c2) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = j + 1;

        for (i, c1) in short.iter().enumerate() {
            let cost = if c1 == c2 {
                diagonal
            } else {
                1 + min(min(diagonal, row[i + 1]), row[i])
            };
            diagonal = row[i + 1];
            row[i + 1] = cost;
        }
    }

    row[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition counts twice
    }

    #[test]
    fn test_symmetry_and_identity() {
        let words = ["", "a", "ba", "bai", "uo", "uoi", "nguoi"];
        for a in &words {
            for b in &words {
                assert_eq!(
                    levenshtein_distance(a, b),
                    levenshtein_distance(b, a),
                    "asymmetric for {a} / {b}"
                );
            }
            assert_eq!(levenshtein_distance(a, a), 0);
        }
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        assert_eq!(levenshtein_distance("mưa", "mua"), 1);
        assert_eq!(levenshtein_distance("ươ", "uo"), 2);
    }
}
