//! fuzzmatch core
//!
//! Pairwise fuzzy string scoring with threshold classification. Every
//! algorithm returns an integer score in `0..=100`; [`classify`] turns a
//! score and a caller threshold into a match decision.
//!
//! # Algorithms
//!
//! - `ratio` - indel-weighted edit distance over the full strings
//! - `partialRatio` - best same-length window of the longer string
//! - `tokenSortRatio` / `tokenSortPartialRatio` - word order neutralized
//! - `tokenSetRatio` / `tokenSetPartialRatio` - word order and duplicates neutralized
//! - `weightedRatio` - length-aware blend of all of the above
//!
//! # Features
//!
//! - `parallel` - score large batches with rayon
//!
//! # Example
//!
//! ```rust
//! use fuzzmatch_core::{score, AlgorithmKind, MatchRequest};
//!
//! let request = MatchRequest::new(
//!     "fuzzy wuzzy was a bear",
//!     "wuzzy fuzzy was a bear",
//!     AlgorithmKind::TokenSortRatio,
//!     90,
//! )
//! .unwrap();
//!
//! let result = score(&request);
//! assert_eq!(result.score, 100);
//! assert!(result.matched);
//! ```

pub mod algorithm;
pub mod blocks;
pub mod classify;
pub mod error;
pub mod normalize;
pub mod partial;
pub mod ratio;
pub mod request;
pub mod token;
pub mod weighted;

// Re-export main types at crate root
pub use algorithm::AlgorithmKind;
pub use classify::classify;
pub use error::{MatchError, Result};
pub use normalize::{normalize, tokenize};
pub use partial::{partial_ratio, partial_ratio_alignment, Alignment};
pub use ratio::{indel_distance, levenshtein, ratio};
pub use request::{score, score_batch, score_json, MatchRequest, MatchResult};
pub use token::{token_set_partial_ratio, token_set_ratio, token_sort_partial_ratio, token_sort_ratio};
pub use weighted::weighted_ratio;
