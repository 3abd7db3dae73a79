//! Matching blocks
//!
//! Maximal common substrings found by recursively taking the longest common
//! substring and repeating on the unmatched text to its left and right.
//! The total block size is a cheap lower bound on the aligned character
//! count, used to score partial-ratio windows without a full realignment.

/// A common run: `a[a_start..a_start + len] == b[b_start..b_start + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Non-overlapping matching blocks ordered by position, adjacent runs merged.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<MatchingBlock> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut blocks = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }

        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
        blocks.push(block);
    }

    blocks.sort_by_key(|m| (m.a_start, m.b_start));
    merge_adjacent(blocks)
}

/// Total number of characters covered by the matching blocks
pub fn matched_chars(a: &[char], b: &[char]) -> usize {
    matching_blocks(a, b).iter().map(|m| m.len).sum()
}

/// Block-based similarity in `0.0..=1.0`: `2 * M / (|a| + |b|)`
pub(crate) fn block_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(a, b) as f64 / total as f64
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties resolve to the earliest start in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a_start: alo,
        b_start: blo,
        len: 0,
    };

    // run[k] = length of the common suffix ending at a[i - 1], b[blo + k - 1]
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo + 1;
            curr[k] = if a[i] == b[j] { prev[k - 1] + 1 } else { 0 };
            if curr[k] > best.len {
                best = MatchingBlock {
                    a_start: i + 1 - curr[k],
                    b_start: j + 1 - curr[k],
                    len: curr[k],
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

fn merge_adjacent(blocks: Vec<MatchingBlock>) -> Vec<MatchingBlock> {
    let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last)
                if last.a_start + last.len == block.a_start
                    && last.b_start + last.len == block.b_start =>
            {
                last.len += block.len;
            }
            _ => merged.push(block),
        }
    }
    merged
}
