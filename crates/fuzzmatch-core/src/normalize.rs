//! Tokenizer and normalizer shared by the token-based algorithms.
//!
//! Case folding is ASCII-only: non-ASCII letters keep their case.

/// Lowercase (ASCII), replace each run of non-alphanumeric characters with
/// a single space, and trim.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Split the normalized string into tokens, in input order.
pub fn tokenize(s: &str) -> Vec<String> {
    normalize(s).split_whitespace().map(str::to_owned).collect()
}

/// Tokens sorted ascending, duplicates kept
pub(crate) fn sorted_tokens(s: &str) -> Vec<String> {
    let mut tokens = tokenize(s);
    tokens.sort_unstable();
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("  New-York,,  Mets!! "), "new york mets");
        assert_eq!(normalize("a__b"), "a b");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t-- "), "");
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize("Route 66"), "route 66");
    }

    #[test]
    fn test_normalize_ascii_only_folding() {
        // Non-ASCII letters are alphanumeric but not case folded
        assert_eq!(normalize("ÉCOLE Paris"), "École paris");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Fuzzy  wuzzy, was a bear"), vec!["fuzzy", "wuzzy", "was", "a", "bear"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_sorted_tokens_keeps_duplicates() {
        assert_eq!(sorted_tokens("b a b"), vec!["a", "b", "b"]);
    }
}
