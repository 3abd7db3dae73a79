//! Threshold classifier

/// A score matches when it reaches the threshold.
#[inline]
pub fn classify(score: u8, threshold: u8) -> bool {
    score >= threshold
}
