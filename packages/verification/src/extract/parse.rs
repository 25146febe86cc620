//! Tolerant parsing of LLM claim output.
//!
//! The model is not guaranteed to return valid JSON: truncated arrays,
//! leading/trailing prose, and legacy plain-text `Text:` / `Confidence:` /
//! `Explanation:` triplets all show up in practice. Parsing is an ordered
//! chain of strategies, each returning `Some(batch)` or no-match; the first
//! success wins and each strategy is testable on its own.

use serde::Deserialize;
use serde_json::Value;

use crate::types::Claim;

/// One record as the model emits it, before hygiene checks.
#[derive(Debug, Deserialize)]
struct RawClaim {
    #[serde(default)]
    text: Option<String>,

    /// Accepts a JSON number or a numeric string.
    #[serde(default)]
    confidence: Option<Value>,

    #[serde(default)]
    explanation: Option<String>,
}

/// Parse LLM output into claims, trying each strategy in order.
///
/// Returns `None` only when every strategy fails; the caller logs the
/// failure and degrades to an empty batch. A successful parse may still
/// yield an empty vec if every record failed hygiene checks.
pub fn parse_claims(content: &str) -> Option<Vec<Claim>> {
    let content = strip_code_blocks(content);

    parse_strict_json(content)
        .or_else(|| parse_bracket_slice(content))
        .or_else(|| parse_legacy_triplets(content))
}

/// Strategy 1: the whole (fence-stripped) content is a JSON array.
fn parse_strict_json(content: &str) -> Option<Vec<Claim>> {
    let records: Vec<RawClaim> = serde_json::from_str(content).ok()?;
    Some(keep_valid(records))
}

/// Strategy 2: prose-wrapped JSON. Slice from the first `[` to the last
/// `]` and reparse.
fn parse_bracket_slice(content: &str) -> Option<Vec<Claim>> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;
    if end <= start {
        return None;
    }
    parse_strict_json(&content[start..=end])
}

/// Strategy 3: legacy plain-text triplets.
///
/// Blocks separated by blank lines, each block at least 3 lines with
/// `Text:` / `Confidence:` / `Explanation:` labels (case-insensitive).
fn parse_legacy_triplets(content: &str) -> Option<Vec<Claim>> {
    let claims: Vec<Claim> = content.split("\n\n").filter_map(parse_triplet_block).collect();

    if claims.is_empty() {
        None
    } else {
        Some(claims)
    }
}

/// Parse one blank-line-delimited block; `None` skips the block without
/// failing the strategy.
fn parse_triplet_block(block: &str) -> Option<Claim> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 3 {
        return None;
    }

    let text = strip_label(lines[0], "Text:")?.trim();
    let confidence = strip_label(lines[1], "Confidence:")?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())?;
    let explanation = strip_label(lines[2], "Explanation:")?.trim();

    if text.is_empty() {
        return None;
    }

    Some(Claim::new(text, confidence, explanation))
}

/// Strip a case-insensitive label prefix from a line.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let prefix = line.get(..label.len())?;
    if prefix.eq_ignore_ascii_case(label) {
        Some(&line[label.len()..])
    } else {
        None
    }
}

/// Record hygiene: drop records missing text or with an unparseable
/// confidence; default a missing explanation to `""`. One bad record never
/// fails the batch.
fn keep_valid(records: Vec<RawClaim>) -> Vec<Claim> {
    records
        .into_iter()
        .filter_map(|record| {
            let text = record.text.filter(|t| !t.trim().is_empty())?;
            let confidence = coerce_confidence(record.confidence.as_ref())?;
            let explanation = record.explanation.unwrap_or_default();
            Some(Claim::new(text, confidence, explanation))
        })
        .collect()
}

/// Coerce a JSON value into a confidence float. Numbers pass through;
/// numeric strings ("0.7") parse; anything else drops the record.
/// Non-finite values ("NaN", "inf") drop too: NaN would survive the
/// clamp and poison the overall mean.
fn coerce_confidence(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Strip markdown code fences the model sometimes wraps output in.
fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
