//! LLM prompts for claim extraction.

/// System instruction fixing the model's role.
pub const SYSTEM_PROMPT: &str = "You are a precise fact-extraction assistant. \
You identify verifiable factual claims in articles and score how confident \
you are that each claim is accurate. You output only the requested format, \
with no commentary.";

/// Prompt for extracting scored claims from article text.
pub const EXTRACT_CLAIMS_PROMPT: &str = r#"Extract the factual claims from this article.

Article:
{article}

Rules:
1. Each claim must be a single, independently checkable factual assertion
2. Score each claim's confidence from 0.0 (likely false) to 1.0 (certainly true)
3. Explain each score briefly
4. Extract at least 3 claims when the article supports it

Output ONLY a JSON array, no prose before or after:
[
    {
        "text": "The claim being made",
        "confidence": 0.0 to 1.0,
        "explanation": "Why this confidence score"
    }
]"#;

/// Format the extraction prompt with article text.
pub fn format_extract_claims(article_text: &str) -> String {
    EXTRACT_CLAIMS_PROMPT.replace("{article}", article_text)
}
