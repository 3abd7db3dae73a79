//! Partial ratio matcher
//!
//! Compares the shorter string against same-length windows of the longer
//! one and keeps the best window. Matching blocks between the two full
//! strings are computed once; each block proposes the window that lines it
//! up with its position in the shorter string. Windows sharing no block
//! with the shorter string cannot score above zero, so they are never
//! visited. Windows are scored with matching blocks rather than a full
//! edit-distance alignment.
//!
//! On equal lengths the first argument is treated as the shorter string, so
//! results are reproducible for a given argument order.

use crate::blocks::{block_ratio, matching_blocks};
use crate::ratio::to_score;
use serde::{Deserialize, Serialize};

/// Window similarity at or above which the search stops and reports 100
pub const PERFECT_ALIGNMENT: f64 = 0.995;

/// Best window found by [`partial_ratio_alignment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Score of the best window, `0..=100`
    pub score: u8,
    /// Whether the first argument played the shorter role
    pub first_is_shorter: bool,
    /// Char offset of the window in the longer string
    pub long_start: usize,
    /// Char offset one past the window end in the longer string
    pub long_end: usize,
}

/// Best-window similarity in `0..=100`.
///
/// A string found verbatim inside the other scores 100.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    partial_ratio_alignment(a, b).score
}

/// Like [`partial_ratio`], also reporting where the best window sits.
pub fn partial_ratio_alignment(a: &str, b: &str) -> Alignment {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    align_chars(&a, &b)
}

fn align_chars(a: &[char], b: &[char]) -> Alignment {
    let first_is_shorter = a.len() <= b.len();
    let (short, long) = if first_is_shorter { (a, b) } else { (b, a) };

    if short.is_empty() {
        return Alignment {
            score: if long.is_empty() { 100 } else { 0 },
            first_is_shorter,
            long_start: 0,
            long_end: 0,
        };
    }

    let last_start = long.len() - short.len();
    let mut visited = vec![false; last_start + 1];
    let mut best = 0.0f64;
    let mut best_start = 0;

    for block in matching_blocks(short, long) {
        let start = block.b_start.saturating_sub(block.a_start).min(last_start);
        if std::mem::replace(&mut visited[start], true) {
            continue;
        }

        let similarity = block_ratio(short, &long[start..start + short.len()]);
        if similarity >= PERFECT_ALIGNMENT {
            return Alignment {
                score: 100,
                first_is_shorter,
                long_start: start,
                long_end: start + short.len(),
            };
        }
        if similarity > best {
            best = similarity;
            best_start = start;
        }
    }

    Alignment {
        score: to_score(100.0 * best),
        first_is_shorter,
        long_start: best_start,
        long_end: best_start + short.len(),
    }
}
