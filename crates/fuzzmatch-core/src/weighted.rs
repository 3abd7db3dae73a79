//! Weighted combiner
//!
//! Picks the best of several scores, favouring full-string comparisons when
//! the inputs have similar lengths and the partial family as lengths
//! diverge. Partial scores are scaled down so a trivial substring hit in a
//! much longer string does not look like a full match.
//!
//! ```text
//! length ratio = max(len) / min(len)
//!
//! < 1.5    max(ratio, token_sort * 0.95, token_set * 0.95)
//! >= 1.5   max(ratio, partial * p, token_sort_partial * 0.95 * p,
//!              token_set_partial * 0.95 * p)
//!          p = 0.90, or 0.60 when the length ratio exceeds 8
//! ```

use crate::normalize::normalize;
use crate::partial::partial_ratio;
use crate::ratio::{ratio, to_score};
use crate::token::{token_set_partial_ratio, token_set_ratio, token_sort_partial_ratio, token_sort_ratio};

/// Length ratio from which the partial family is used
pub const PARTIAL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio above which partial scores take the heavier penalty
pub const LARGE_MISMATCH_LENGTH_RATIO: f64 = 8.0;

/// Scale applied to token-based scores
pub const UNBASE_SCALE: f64 = 0.95;

/// Scale applied to partial scores
pub const PARTIAL_SCALE: f64 = 0.90;

/// Scale applied to partial scores for very mismatched lengths
pub const LARGE_MISMATCH_SCALE: f64 = 0.60;

/// Length-aware best-effort score in `0..=100`.
///
/// Inputs are normalized first. Two empty inputs score 100, one empty
/// input scores 0.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    let a = normalize(a);
    let b = normalize(b);

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 && len_b == 0 {
        return 100;
    }
    if len_a == 0 || len_b == 0 {
        return 0;
    }

    let base = f64::from(ratio(&a, &b));
    let length_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;

    let best = if length_ratio < PARTIAL_LENGTH_RATIO {
        let token_sort = f64::from(token_sort_ratio(&a, &b)) * UNBASE_SCALE;
        let token_set = f64::from(token_set_ratio(&a, &b)) * UNBASE_SCALE;
        base.max(token_sort).max(token_set)
    } else {
        let partial_scale = if length_ratio > LARGE_MISMATCH_LENGTH_RATIO {
            LARGE_MISMATCH_SCALE
        } else {
            PARTIAL_SCALE
        };
        let token_scale = UNBASE_SCALE * partial_scale;

        let partial = f64::from(partial_ratio(&a, &b)) * partial_scale;
        let token_sort = f64::from(token_sort_partial_ratio(&a, &b)) * token_scale;
        let token_set = f64::from(token_set_partial_ratio(&a, &b)) * token_scale;
        base.max(partial).max(token_sort).max(token_set)
    };

    to_score(best)
}
