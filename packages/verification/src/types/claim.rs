//! Claim type: one extracted, confidence-scored factual assertion.

use serde::{Deserialize, Serialize};

/// A single factual assertion extracted from article text, with a
/// confidence score in `[0.0, 1.0]`.
///
/// Claims are immutable value records. Verification never mutates a claim
/// in place; it returns a new value per entry (see [`Claim::annotated`] and
/// [`Claim::boosted`]), so there is no shared mutable state even if search
/// calls run concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// The assertion itself.
    pub text: String,

    /// Confidence that the assertion is accurate, in `[0.0, 1.0]`.
    pub confidence: f64,

    /// Why this confidence score, plus any evidence annotations appended
    /// during verification.
    pub explanation: String,
}

impl Claim {
    /// Create a new claim. Confidence is clamped into `[0.0, 1.0]`.
    pub fn new(text: impl Into<String>, confidence: f64, explanation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.clamp(0.0, 1.0),
            explanation: explanation.into(),
        }
    }

    /// Return a copy with `suffix` appended to the explanation.
    pub fn annotated(&self, suffix: impl AsRef<str>) -> Self {
        Self {
            text: self.text.clone(),
            confidence: self.confidence,
            explanation: format!("{}{}", self.explanation, suffix.as_ref()),
        }
    }

    /// Return a copy with confidence raised by `boost`, clamped at `1.0`.
    pub fn boosted(&self, boost: f64) -> Self {
        Self {
            text: self.text.clone(),
            confidence: (self.confidence + boost).clamp(0.0, 1.0),
            explanation: self.explanation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_confidence() {
        let high = Claim::new("A", 1.7, "E");
        assert_eq!(high.confidence, 1.0);

        let low = Claim::new("A", -0.2, "E");
        assert_eq!(low.confidence, 0.0);
    }

    #[test]
    fn test_boosted_clamps_at_one() {
        let claim = Claim::new("A", 0.9, "E");
        let boosted = claim.boosted(0.3);
        assert_eq!(boosted.confidence, 1.0);
        // Original untouched
        assert_eq!(claim.confidence, 0.9);
    }

    #[test]
    fn test_annotated_appends() {
        let claim = Claim::new("A", 0.4, "base");
        let annotated = claim.annotated(" (extra)");
        assert_eq!(annotated.explanation, "base (extra)");
        assert_eq!(claim.explanation, "base");
    }

    #[test]
    fn test_serde_shape() {
        let claim = Claim::new("Water boils at 100C", 0.95, "Well established");
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["text"], "Water boils at 100C");
        assert_eq!(json["confidence"], 0.95);
        assert_eq!(json["explanation"], "Well established");
    }
}
