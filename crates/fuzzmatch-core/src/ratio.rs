//! Edit-distance ratio engine
//!
//! The ratio counts aligned characters under an indel alignment
//! (substitution weighs as a delete plus an insert):
//!
//! ```text
//! matches = (|a| + |b| - indel_distance(a, b)) / 2
//! ratio   = round(200 * matches / (|a| + |b|))
//! ```
//!
//! The indel distance runs a two-row dynamic program over `char`s, so
//! working memory is proportional to the shorter input. Unit-cost
//! Levenshtein comes from `strsim`.

/// Substitution weight for the indel distance
const INDEL_SUBSTITUTION_COST: usize = 2;

/// Unit-cost Levenshtein distance (insert, delete, substitute).
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Levenshtein distance where a substitution costs 2.
///
/// Equals `|a| + |b| - 2 * lcs(a, b)`.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_chars(&a, &b)
}

/// Full-string similarity in `0..=100`. Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

pub(crate) fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }

    let distance = indel_chars(a, b);
    let matches = (total - distance) / 2;
    to_score(200.0 * matches as f64 / total as f64)
}

/// Round a 0-100 float score and clamp it into range
pub(crate) fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn indel_chars(a: &[char], b: &[char]) -> usize {
    // Rows run over the shorter input
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitute = prev[j] + if lc == sc { 0 } else { INDEL_SUBSTITUTION_COST };
            let delete = prev[j + 1] + 1;
            let insert = curr[j] + 1;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(ratio("hello", "hello"), 100);
        assert_eq!(ratio("New York Mets", "New York Mets"), 100);
    }

    #[test]
    fn test_empty() {
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("", "abc"), 0);
        assert_eq!(ratio("abc", ""), 0);
    }

    #[test]
    fn test_single_substitution() {
        // lcs = 4 of 10 chars total
        assert_eq!(ratio("hello", "hallo"), 80);
        assert_eq!(indel_distance("hello", "hallo"), 2);
        assert_eq!(levenshtein("hello", "hallo"), 1);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(ratio("abc", "xyz"), 0);
        assert_eq!(levenshtein("abc", "xyz"), 3);
        assert_eq!(indel_distance("abc", "xyz"), 6);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(ratio("ABC", "abc"), 0);
    }

    #[test]
    fn test_rounding() {
        // lcs("abc", "abd") = 2, 200 * 2 / 6 = 66.67
        assert_eq!(ratio("abc", "abd"), 67);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(ratio("café", "cafe"), 75);
        assert_eq!(levenshtein("café", "cafe"), 1);
    }

    #[test]
    fn test_indel_bounds_levenshtein() {
        // a substitution is one Levenshtein edit and two indel edits
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "abc"), ("same", "same")] {
            let unit = levenshtein(a, b);
            let indel = indel_distance(a, b);
            assert!(unit <= indel && indel <= 2 * unit, "{} / {}", a, b);
        }
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(ratio("kitten", "sitting"), ratio("sitting", "kitten"));
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }
}
