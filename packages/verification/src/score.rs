//! Confidence aggregation.

use crate::types::Claim;

/// Arithmetic mean of claim confidences; `0.0` for an empty batch.
///
/// Pure and idempotent; the one component with no failure modes.
pub fn aggregate_confidence(claims: &[Claim]) -> f64 {
    if claims.is_empty() {
        return 0.0;
    }
    claims.iter().map(|c| c.confidence).sum::<f64>() / claims.len() as f64
}
