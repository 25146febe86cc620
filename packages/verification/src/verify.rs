//! Evidence verification for low-confidence claims.
//!
//! Claims under the confidence threshold get a web-search cross-check; the
//! top snippets are appended to the claim's explanation and a keyword
//! heuristic decides whether the evidence corroborates the claim. Search is
//! skipped for already-confident claims because it costs money per query.

use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::traits::{Snippet, SnippetSearch};
use crate::types::Claim;

/// Cross-checks uncertain claims against a snippet search provider.
pub struct EvidenceVerifier<S: SnippetSearch> {
    search: S,
    threshold: f64,
    boost: f64,
    search_results: usize,
    snippets_consumed: usize,
    keywords: Vec<String>,
}

impl<S: SnippetSearch> EvidenceVerifier<S> {
    /// Create a verifier over a search provider.
    pub fn new(search: S, config: &PipelineConfig) -> Self {
        Self {
            search,
            threshold: config.verification_threshold,
            boost: config.evidence_boost,
            search_results: config.search_results,
            snippets_consumed: config.snippets_consumed,
            keywords: config
                .corroboration_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    /// Verify a batch of claims, preserving length and extraction order.
    ///
    /// Each output entry is either the original claim (confident enough to
    /// skip) or an evidence-annotated copy. A failed search annotates its
    /// own claim and never aborts the rest of the batch.
    pub async fn verify(&self, claims: Vec<Claim>) -> Vec<Claim> {
        let mut verified = Vec::with_capacity(claims.len());
        for claim in claims {
            if claim.confidence >= self.threshold {
                verified.push(claim);
                continue;
            }
            verified.push(self.verify_one(claim).await);
        }
        verified
    }

    async fn verify_one(&self, claim: Claim) -> Claim {
        match self.search.search(&claim.text, self.search_results).await {
            Ok(snippets) => {
                let consumed = &snippets[..snippets.len().min(self.snippets_consumed)];
                debug!(
                    claim = %claim.text,
                    snippets = consumed.len(),
                    "evidence gathered"
                );

                if consumed.is_empty() {
                    return claim.annotated(" (Verified evidence: none found)");
                }

                let summary = consumed
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                let annotated = claim.annotated(format!(" (Verified evidence: {})", summary));

                if self.corroborates(consumed) {
                    annotated.boosted(self.boost)
                } else {
                    annotated
                }
            }
            Err(e) => {
                warn!(claim = %claim.text, error = %e, "claim search failed");
                claim.annotated(format!(" (Search verification failed: {})", e))
            }
        }
    }

    /// Heuristic corroboration signal, not a proof: any consumed snippet
    /// containing one of the configured keywords (case-insensitive).
    fn corroborates(&self, snippets: &[Snippet]) -> bool {
        snippets.iter().any(|snippet| {
            let text = snippet.text.to_lowercase();
            self.keywords.iter().any(|keyword| text.contains(keyword))
        })
    }
}
