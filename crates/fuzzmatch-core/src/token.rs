//! Token sort and token set components
//!
//! Token sort compares the alphabetically re-joined tokens of each input,
//! which neutralizes word order. Token set also collapses duplicates and
//! scores the shared tokens against each side's extras:
//!
//! ```text
//! t0 = sorted(intersection)
//! t1 = t0 + sorted(only in a)
//! t2 = t0 + sorted(only in b)
//! score = max(r(t0, t1), r(t0, t2), r(t1, t2))
//! ```

use std::collections::BTreeSet;

use crate::normalize::{sorted_tokens, tokenize};
use crate::partial::partial_ratio;
use crate::ratio::ratio;

/// Ratio of the sorted-token forms of both inputs
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sort_join(a), &sort_join(b))
}

/// Partial ratio of the sorted-token forms of both inputs
pub fn token_sort_partial_ratio(a: &str, b: &str) -> u8 {
    partial_ratio(&sort_join(a), &sort_join(b))
}

/// Best ratio across the intersection/difference comparison strings
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set_with(a, b, ratio)
}

/// Best partial ratio across the intersection/difference comparison strings
pub fn token_set_partial_ratio(a: &str, b: &str) -> u8 {
    token_set_with(a, b, partial_ratio)
}

fn sort_join(s: &str) -> String {
    sorted_tokens(s).join(" ")
}

/// Sorted, deduplicated token partition of two inputs
#[derive(Debug, Default, PartialEq)]
struct TokenPartition {
    intersection: Vec<String>,
    only_a: Vec<String>,
    only_b: Vec<String>,
}

impl TokenPartition {
    fn new(a: &str, b: &str) -> Self {
        let set_a: BTreeSet<String> = tokenize(a).into_iter().collect();
        let set_b: BTreeSet<String> = tokenize(b).into_iter().collect();

        Self {
            intersection: set_a.intersection(&set_b).cloned().collect(),
            only_a: set_a.difference(&set_b).cloned().collect(),
            only_b: set_b.difference(&set_a).cloned().collect(),
        }
    }

    /// Exactly one input had no tokens at all
    fn is_one_sided(&self) -> bool {
        self.intersection.is_empty() && (self.only_a.is_empty() != self.only_b.is_empty())
    }

    /// The three comparison strings `(t0, t1, t2)`
    fn comparison_strings(&self) -> (String, String, String) {
        let t0 = self.intersection.join(" ");
        let t1 = join_after(&t0, &self.only_a);
        let t2 = join_after(&t0, &self.only_b);
        (t0, t1, t2)
    }
}

fn join_after(head: &str, tail: &[String]) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_owned(),
        (true, false) => tail.join(" "),
        (false, false) => format!("{} {}", head, tail.join(" ")),
    }
}

fn token_set_with(a: &str, b: &str, scorer: fn(&str, &str) -> u8) -> u8 {
    let partition = TokenPartition::new(a, b);
    // t0 and one side would both be empty and compare as identical
    if partition.is_one_sided() {
        return 0;
    }

    let (t0, t1, t2) = partition.comparison_strings();

    scorer(&t0, &t1)
        .max(scorer(&t0, &t2))
        .max(scorer(&t1, &t2))
}
