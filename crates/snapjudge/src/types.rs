//! Result types handed back to the caller.

use serde::Serialize;
use uuid::Uuid;

/// Go / No-Go verdict. Every model output collapses into one of these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Decision {
    #[serde(rename = "Go")]
    Go,
    #[serde(rename = "No-Go")]
    NoGo,
    #[serde(rename = "Maybe")]
    Maybe,
}

impl Decision {
    /// Map a free-form decision string. Total: unknown input becomes `Maybe`.
    pub fn normalize(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "go" => Decision::Go,
            "no-go" | "nogo" | "no_go" => Decision::NoGo,
            _ => Decision::Maybe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Go => "Go",
            Decision::NoGo => "No-Go",
            Decision::Maybe => "Maybe",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated verdict for one analyzed image.
///
/// `id` exists for list identity in a UI and is unique per instance; two results
/// built from the same model output differ only in `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    id: Uuid,
    idea_title: String,
    idea_summary: String,
    /// 0-100 by convention; not enforced
    feasibility_score: i64,
    cost_estimate: String,
    time_estimate: String,
    /// 1-5 by convention; not enforced
    complexity_level: i64,
    decision: Decision,
    reasons: String,
}

impl AnalysisResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        idea_title: impl Into<String>,
        idea_summary: impl Into<String>,
        feasibility_score: i64,
        cost_estimate: impl Into<String>,
        time_estimate: impl Into<String>,
        complexity_level: i64,
        decision: Decision,
        reasons: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            idea_title: idea_title.into(),
            idea_summary: idea_summary.into(),
            feasibility_score,
            cost_estimate: cost_estimate.into(),
            time_estimate: time_estimate.into(),
            complexity_level,
            decision,
            reasons: reasons.into(),
        }
    }

    /// Canned result for previews and placeholders.
    pub fn sample() -> Self {
        Self::new(
            "AI Startup Idea Evaluator",
            "An app that scores startup ideas from screenshots or notes.",
            82,
            "$5k–$15k to MVP",
            "4–8 weeks with 1 dev",
            3,
            Decision::Go,
            "Clear problem, narrow scope, and well-defined users (founders & builders).\n\
             Main challenges are UX polish and AI cost optimization.",
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn idea_title(&self) -> &str {
        &self.idea_title
    }

    pub fn idea_summary(&self) -> &str {
        &self.idea_summary
    }

    pub fn feasibility_score(&self) -> i64 {
        self.feasibility_score
    }

    pub fn cost_estimate(&self) -> &str {
        &self.cost_estimate
    }

    pub fn time_estimate(&self) -> &str {
        &self.time_estimate
    }

    pub fn complexity_level(&self) -> i64 {
        self.complexity_level
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    pub fn reasons(&self) -> &str {
        &self.reasons
    }

    /// Equality ignoring `id`.
    pub fn same_verdict(&self, other: &AnalysisResult) -> bool {
        self.idea_title == other.idea_title
            && self.idea_summary == other.idea_summary
            && self.feasibility_score == other.feasibility_score
            && self.cost_estimate == other.cost_estimate
            && self.time_estimate == other.time_estimate
            && self.complexity_level == other.complexity_level
            && self.decision == other.decision
            && self.reasons == other.reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_go() {
        for raw in ["go", "Go", "GO"] {
            assert_eq!(Decision::normalize(raw), Decision::Go, "{raw}");
        }
    }

    #[test]
    fn test_normalize_no_go() {
        for raw in ["no-go", "NoGo", "no_go", "NO-GO"] {
            assert_eq!(Decision::normalize(raw), Decision::NoGo, "{raw}");
        }
    }

    #[test]
    fn test_normalize_falls_back_to_maybe() {
        for raw in ["maybe", "unsure", "", " go", "no go", "yes"] {
            assert_eq!(Decision::normalize(raw), Decision::Maybe, "{raw:?}");
        }
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::Go.to_string(), "Go");
        assert_eq!(Decision::NoGo.to_string(), "No-Go");
        assert_eq!(Decision::Maybe.to_string(), "Maybe");
    }

    #[test]
    fn test_fresh_identity_per_instance() {
        let a = AnalysisResult::sample();
        let b = AnalysisResult::sample();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert!(a.same_verdict(&b));
    }

    #[test]
    fn test_serializes_camel_case_with_decision_label() {
        let value = serde_json::to_value(AnalysisResult::sample()).unwrap();
        assert_eq!(value["ideaTitle"], "AI Startup Idea Evaluator");
        assert_eq!(value["feasibilityScore"], 82);
        assert_eq!(value["complexityLevel"], 3);
        assert_eq!(value["decision"], "Go");
        assert!(value["id"].is_string());
    }
}
