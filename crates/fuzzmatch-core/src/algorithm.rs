//! Algorithm selection
//!
//! The set of algorithms is closed. Selector strings are parsed once at the
//! boundary; after that dispatch is an exhaustive match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::partial::partial_ratio;
use crate::ratio::ratio;
use crate::token::{token_set_partial_ratio, token_set_ratio, token_sort_partial_ratio, token_sort_ratio};
use crate::weighted::weighted_ratio;

/// Fuzzy matching algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlgorithmKind {
    /// Full-string edit-distance ratio
    #[default]
    Ratio,
    /// Best same-length window of the longer string
    #[serde(alias = "partial_ratio")]
    PartialRatio,
    /// Ratio over alphabetically sorted tokens
    #[serde(alias = "token_sort_ratio")]
    TokenSortRatio,
    /// Partial ratio over alphabetically sorted tokens
    #[serde(alias = "token_sort_partial_ratio")]
    TokenSortPartialRatio,
    /// Ratio over token intersection/difference strings
    #[serde(alias = "token_set_ratio")]
    TokenSetRatio,
    /// Partial ratio over token intersection/difference strings
    #[serde(alias = "token_set_partial_ratio")]
    TokenSetPartialRatio,
    /// Length-aware blend of the other algorithms
    #[serde(alias = "weighted_ratio")]
    WeightedRatio,
}

impl AlgorithmKind {
    /// Every algorithm, in declaration order
    pub const ALL: [AlgorithmKind; 7] = [
        Self::Ratio,
        Self::PartialRatio,
        Self::TokenSortRatio,
        Self::TokenSortPartialRatio,
        Self::TokenSetRatio,
        Self::TokenSetPartialRatio,
        Self::WeightedRatio,
    ];

    /// Selector key, as used in configuration
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::PartialRatio => "partialRatio",
            Self::TokenSortRatio => "tokenSortRatio",
            Self::TokenSortPartialRatio => "tokenSortPartialRatio",
            Self::TokenSetRatio => "tokenSetRatio",
            Self::TokenSetPartialRatio => "tokenSetPartialRatio",
            Self::WeightedRatio => "weightedRatio",
        }
    }

    /// All selector keys, sorted
    pub fn keys() -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Self::ALL.iter().map(Self::key).collect();
        keys.sort_unstable();
        keys
    }

    /// Score `a` against `b` with this algorithm
    pub fn score(&self, a: &str, b: &str) -> u8 {
        match self {
            Self::Ratio => ratio(a, b),
            Self::PartialRatio => partial_ratio(a, b),
            Self::TokenSortRatio => token_sort_ratio(a, b),
            Self::TokenSortPartialRatio => token_sort_partial_ratio(a, b),
            Self::TokenSetRatio => token_set_ratio(a, b),
            Self::TokenSetPartialRatio => token_set_partial_ratio(a, b),
            Self::WeightedRatio => weighted_ratio(a, b),
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = MatchError;

    /// Accepts the camelCase keys and their snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == trimmed || snake_case(kind.key()) == trimmed)
            .ok_or_else(|| MatchError::InvalidAlgorithm(s.to_string()))
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
