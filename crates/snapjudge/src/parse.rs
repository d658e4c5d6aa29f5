//! Result parser: tolerate code fences, decode the fixed schema, normalize the decision.

use serde::{Deserialize, Deserializer};
use serde_json::Number;

use crate::error::Result;
use crate::types::{AnalysisResult, Decision};

const CODE_FENCE: &str = "```";

/// Shape the model is instructed to emit. Every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisPayload {
    idea_title: String,
    idea_summary: String,
    #[serde(deserialize_with = "whole_number")]
    feasibility_score: i64,
    cost_estimate: String,
    time_estimate: String,
    #[serde(deserialize_with = "whole_number")]
    complexity_level: i64,
    decision: String,
    reasons: String,
}

/// Integer field that also accepts a float with no fractional part (`80.0`).
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {}",
            number
        ))),
    }
}

impl From<AnalysisPayload> for AnalysisResult {
    fn from(payload: AnalysisPayload) -> Self {
        AnalysisResult::new(
            payload.idea_title,
            payload.idea_summary,
            payload.feasibility_score,
            payload.cost_estimate,
            payload.time_estimate,
            payload.complexity_level,
            Decision::normalize(&payload.decision),
            payload.reasons,
        )
    }
}

/// Trim, and if the text opens with a code fence keep only the span from the first
/// `{` to the last `}`. Unfenced text, or fenced text without braces, is returned trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with(CODE_FENCE) {
        return trimmed;
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Parse model output into a validated [`AnalysisResult`].
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult> {
    let json = strip_code_fence(raw);
    let payload: AnalysisPayload = serde_json::from_str(json)?;
    Ok(payload.into())
}
