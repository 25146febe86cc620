//! Request and result types for one analysis run.

use serde::{Deserialize, Serialize};

use super::claim::Claim;

/// An incoming analysis request. Immutable, one per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The article URL to analyze.
    pub url: String,
}

impl AnalysisRequest {
    /// Create a request for a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// The terminal value of one pipeline run. Created exactly once per request.
///
/// `status` is `"success"` if and only if the pipeline ran to completion
/// (the claim list may still be empty on success); otherwise it is a
/// human-readable `"error: <stage> - <detail>"` string. No error type ever
/// escapes the pipeline boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analyzed URL, echoed back.
    pub url: String,

    /// Extracted claims in extraction order, evidence-annotated where
    /// verification ran.
    pub claims: Vec<Claim>,

    /// Arithmetic mean of claim confidences; `0.0` when `claims` is empty.
    pub overall_confidence: f64,

    /// `"success"` or `"error: <stage> - <detail>"`.
    pub status: String,
}

impl AnalysisResult {
    /// A completed run.
    pub fn success(url: impl Into<String>, claims: Vec<Claim>, overall_confidence: f64) -> Self {
        Self {
            url: url.into(),
            claims,
            overall_confidence,
            status: "success".to_string(),
        }
    }

    /// A run that died at some stage. Carries no claims and a zero score.
    pub fn failed(url: impl Into<String>, detail: impl AsRef<str>) -> Self {
        Self {
            url: url.into(),
            claims: Vec::new(),
            overall_confidence: 0.0,
            status: format!("error: {}", detail.as_ref()),
        }
    }

    /// Whether the pipeline ran to completion.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        let result = AnalysisResult::success("https://example.com", vec![], 0.0);
        assert!(result.is_success());
        assert_eq!(result.status, "success");
    }

    #[test]
    fn test_failed_status_format() {
        let result = AnalysisResult::failed("https://example.com", "Failed to fetch article - HTTP 404");
        assert!(!result.is_success());
        assert_eq!(result.status, "error: Failed to fetch article - HTTP 404");
        assert!(result.claims.is_empty());
        assert_eq!(result.overall_confidence, 0.0);
    }

    #[test]
    fn test_boundary_json_shape() {
        let result = AnalysisResult::success(
            "https://example.com/a",
            vec![Claim::new("A", 0.9, "E")],
            0.9,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["url"], "https://example.com/a");
        assert_eq!(json["overall_confidence"], 0.9);
        assert_eq!(json["status"], "success");
        assert_eq!(json["claims"][0]["text"], "A");
    }
}
