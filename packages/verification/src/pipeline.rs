//! Pipeline orchestration.
//!
//! Linear stage sequence: FETCHING → EXTRACTING → VERIFYING → AGGREGATING.
//! A fetch failure or an LLM transport failure short-circuits into an
//! error-status result; everything else runs to completion, even with zero
//! claims. [`Pipeline::run`] never returns an error: every failure path
//! terminates in a well-formed [`AnalysisResult`] whose `status` string
//! carries the detail.

use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::extract::ClaimExtractor;
use crate::fetch::ArticleFetcher;
use crate::score::aggregate_confidence;
use crate::traits::{LanguageModel, SnippetSearch};
use crate::types::{AnalysisRequest, AnalysisResult};
use crate::verify::EvidenceVerifier;

/// The claim-verification pipeline, generic over its two capability seams.
///
/// Stateless across requests: safe to share behind an `Arc` and invoke
/// reentrantly, no locking required.
pub struct Pipeline<M: LanguageModel, S: SnippetSearch> {
    fetcher: ArticleFetcher,
    extractor: ClaimExtractor<M>,
    verifier: EvidenceVerifier<S>,
}

impl<M: LanguageModel, S: SnippetSearch> Pipeline<M, S> {
    /// Assemble a pipeline from its capabilities and configuration.
    pub fn new(model: M, search: S, config: PipelineConfig) -> Self {
        Self {
            fetcher: ArticleFetcher::new(&config),
            extractor: ClaimExtractor::new(model, &config),
            verifier: EvidenceVerifier::new(search, &config),
        }
    }

    /// Run one analysis. Never fails; failures land in `status`.
    pub async fn run(&self, request: AnalysisRequest) -> AnalysisResult {
        let url = request.url;
        debug!(url = %url, "analysis started");

        let article = match self.fetcher.fetch(&url).await {
            Ok(article) => article,
            Err(e) => {
                warn!(url = %url, error = %e, "fetch stage failed");
                return AnalysisResult::failed(url, format!("Failed to fetch article - {}", e));
            }
        };

        let claims = match self.extractor.extract(&article.text).await {
            Ok(claims) => claims,
            Err(e) => {
                warn!(url = %url, error = %e, "extraction stage failed");
                return AnalysisResult::failed(url, format!("xAI API failed - {}", e));
            }
        };

        // Verification and aggregation run unconditionally, zero claims
        // included; an unparseable LLM response is a success with no claims.
        let claims = self.verifier.verify(claims).await;
        let overall = aggregate_confidence(&claims);

        info!(
            url = %url,
            claims = claims.len(),
            overall_confidence = overall,
            "analysis completed"
        );

        AnalysisResult::success(url, claims, overall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockLanguageModel, MockSnippetSearch};

    fn pipeline(
        model: MockLanguageModel,
        search: MockSnippetSearch,
    ) -> Pipeline<MockLanguageModel, MockSnippetSearch> {
        Pipeline::new(model, search, PipelineConfig::default())
    }

    #[tokio::test]
    async fn test_fetch_failure_short_circuits() {
        let p = pipeline(MockLanguageModel::new(), MockSnippetSearch::new());

        // Unroutable URL: the fetch stage fails before any LLM call.
        let result = p
            .run(AnalysisRequest::new("http://127.0.0.1:1/article"))
            .await;

        assert!(result.status.starts_with("error: Failed to fetch article"));
        assert!(result.claims.is_empty());
        assert_eq!(result.overall_confidence, 0.0);
    }

    #[tokio::test]
    async fn test_invalid_url_reports_fetch_error() {
        let p = pipeline(MockLanguageModel::new(), MockSnippetSearch::new());
        let result = p.run(AnalysisRequest::new("definitely not a url")).await;

        assert!(result.status.starts_with("error: Failed to fetch article"));
    }
}
