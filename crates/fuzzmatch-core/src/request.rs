//! Match requests and results
//!
//! A [`MatchRequest`] is validated when it is built, so [`score`] never
//! fails. String-typed hosts go through [`MatchRequest::parse`] or the JSON
//! boundary in [`score_json`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::algorithm::AlgorithmKind;
use crate::classify::classify;
use crate::error::{MatchError, Result};

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Threshold used when a request does not carry one
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Batches at least this large are scored in parallel (with `parallel`)
pub const PARALLEL_THRESHOLD: usize = 1000;

/// A validated pairwise comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchRequest")]
pub struct MatchRequest {
    input: String,
    target: String,
    algorithm: AlgorithmKind,
    threshold: u8,
}

/// Outcome of scoring one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Similarity in `0..=100`
    pub score: u8,
    /// `score >= threshold`
    pub matched: bool,
}

impl MatchRequest {
    /// Build a request, rejecting out-of-range thresholds and blank strings.
    pub fn new(
        input: impl Into<String>,
        target: impl Into<String>,
        algorithm: AlgorithmKind,
        threshold: i64,
    ) -> Result<Self> {
        let threshold = u8::try_from(threshold)
            .ok()
            .filter(|t| *t <= 100)
            .ok_or_else(|| MatchError::InvalidThreshold(threshold.to_string()))?;

        let input = input.into();
        let target = target.into();
        require_non_blank("input", &input)?;
        require_non_blank("target", &target)?;

        Ok(Self {
            input,
            target,
            algorithm,
            threshold,
        })
    }

    /// Build a request from already-resolved host strings.
    pub fn parse(input: &str, target: &str, algorithm: &str, threshold: &str) -> Result<Self> {
        let algorithm: AlgorithmKind = algorithm.parse()?;
        let threshold = parse_threshold(threshold)?;
        Self::new(input, target, algorithm, threshold)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }
}

fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::InvalidInput { field });
    }
    Ok(())
}

fn parse_threshold(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| MatchError::InvalidThreshold(text.to_string()))
}

/// Threshold as it may arrive over JSON: a number or a numeric string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ThresholdValue {
    Number(i64),
    Text(String),
}

impl Default for ThresholdValue {
    fn default() -> Self {
        Self::Number(i64::from(DEFAULT_THRESHOLD))
    }
}

#[derive(Debug, Deserialize)]
struct RawMatchRequest {
    input: String,
    target: String,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default)]
    threshold: ThresholdValue,
}

fn default_algorithm() -> String {
    AlgorithmKind::default().key().to_string()
}

impl TryFrom<RawMatchRequest> for MatchRequest {
    type Error = MatchError;

    fn try_from(raw: RawMatchRequest) -> Result<Self> {
        let algorithm: AlgorithmKind = raw.algorithm.parse()?;
        let threshold = match raw.threshold {
            ThresholdValue::Number(n) => n,
            ThresholdValue::Text(text) => parse_threshold(&text)?,
        };
        Self::new(raw.input, raw.target, algorithm, threshold)
    }
}

/// Score a request and classify it against its threshold.
///
/// The target is passed to the algorithm as the first argument, the input
/// as the second.
pub fn score(request: &MatchRequest) -> MatchResult {
    let score = request.algorithm.score(&request.target, &request.input);
    let matched = classify(score, request.threshold);

    trace!(
        algorithm = %request.algorithm,
        score,
        threshold = request.threshold,
        matched,
        "scored match request"
    );

    MatchResult { score, matched }
}

/// Score independent requests, in order.
#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
pub fn score_batch(requests: &[MatchRequest]) -> Vec<MatchResult> {
    if requests.len() >= PARALLEL_THRESHOLD {
        debug!(count = requests.len(), "scoring batch in parallel");
        requests.par_iter().map(score).collect()
    } else {
        requests.iter().map(score).collect()
    }
}

/// Score independent requests, in order.
#[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
pub fn score_batch(requests: &[MatchRequest]) -> Vec<MatchResult> {
    debug!(count = requests.len(), "scoring batch");
    requests.iter().map(score).collect()
}

/// JSON boundary: `{"input", "target", "algorithm"?, "threshold"?}` in,
/// `{"score", "matched"}` or `{"error"}` out.
pub fn score_json(input: &str) -> String {
    let request: MatchRequest = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid match request: {}", e)),
    };

    let result = score(&request);

    match serde_json::to_string(&result) {
        Ok(json) => json,
        Err(e) => error_json(format!("serialization failed: {}", e)),
    }
}

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}
