//! End-to-end scoring scenarios

use fuzzmatch_core::{
    partial_ratio, ratio, score, token_set_ratio, token_sort_ratio, AlgorithmKind, MatchError,
    MatchRequest,
};
use pretty_assertions::assert_eq;

#[test]
fn test_unrelated_teams_do_not_match() {
    let request = MatchRequest::new("New York Mets", "Yankees", AlgorithmKind::Ratio, 80).unwrap();
    let result = score(&request);

    assert!(result.score < 60, "expected a low score, got {}", result.score);
    assert!(!result.matched);
}

#[test]
fn test_reordered_words_match_with_token_sort() {
    let request = MatchRequest::new(
        "fuzzy wuzzy was a bear",
        "wuzzy fuzzy was a bear",
        AlgorithmKind::TokenSortRatio,
        90,
    )
    .unwrap();
    let result = score(&request);

    assert_eq!(result.score, 100);
    assert!(result.matched);
}

#[test]
fn test_token_set_partial_matches_subset_phrase() {
    let request = MatchRequest::new(
        "mariners vs angels",
        "los angeles angels at seattle mariners",
        AlgorithmKind::TokenSetPartialRatio,
        70,
    )
    .unwrap();
    let result = score(&request);

    assert!(result.score >= 70, "got {}", result.score);
    assert!(result.matched);
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let result = MatchRequest::parse("a", "b", "bogus", "80");
    assert_eq!(result, Err(MatchError::InvalidAlgorithm("bogus".to_string())));
}

#[test]
fn test_token_set_not_harsher_than_ratio() {
    assert!(token_set_ratio("a b c", "c b") >= ratio("a b c", "c b"));
}

#[test]
fn test_token_sort_swaps() {
    assert_eq!(token_sort_ratio("a b", "b a"), 100);
}

#[test]
fn test_partial_beats_ratio_for_embedded_phrase() {
    let short = "seattle mariners";
    let long = "los angeles angels at seattle mariners";
    assert_eq!(partial_ratio(short, long), 100);
    assert!(partial_ratio(short, long) >= ratio(short, long));
}

#[test]
fn test_every_algorithm_scores_identical_strings_100() {
    for kind in AlgorithmKind::ALL {
        let request = MatchRequest::new("Same Text", "Same Text", kind, 100).unwrap();
        let result = score(&request);
        assert_eq!(result.score, 100, "{} scored {}", kind, result.score);
        assert!(result.matched);
    }
}

#[test]
fn test_threshold_zero_always_matches() {
    for kind in AlgorithmKind::ALL {
        let request = MatchRequest::new("abc", "xyz", kind, 0).unwrap();
        assert!(score(&request).matched, "{}", kind);
    }
}
