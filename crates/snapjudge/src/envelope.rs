//! Response extractor: locate the model's text in a reply whose shape is not fixed.
//!
//! The Responses API sometimes flattens the text into a top-level `output_text`
//! field and sometimes only nests it under `output[0].content[0].text`. Each known
//! shape has its own strategy; strategies are tried in order and the first
//! non-empty match wins.

use serde_json::Value;

use crate::error::{AnalysisError, Result};

/// Untrusted reply body as returned by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReplyEnvelope(Value);

/// Which known shape carried the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyShape {
    /// Top-level `output_text`
    Flattened(String),
    /// `output[0].content[0].text`
    Nested(String),
    /// Neither shape yielded non-empty text
    Unknown,
}

impl ReplyShape {
    pub fn text(&self) -> Option<&str> {
        match self {
            ReplyShape::Flattened(text) | ReplyShape::Nested(text) => Some(text),
            ReplyShape::Unknown => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ReplyShape::Flattened(_) => "flattened",
            ReplyShape::Nested(_) => "nested",
            ReplyShape::Unknown => "unknown",
        }
    }
}

type Strategy = fn(&Value) -> Option<ReplyShape>;

/// Tried first to last.
const STRATEGIES: &[Strategy] = &[flattened_text, nested_text];

fn flattened_text(value: &Value) -> Option<ReplyShape> {
    value
        .get("output_text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(|text| ReplyShape::Flattened(text.to_string()))
}

fn nested_text(value: &Value) -> Option<ReplyShape> {
    value
        .get("output")?
        .as_array()?
        .first()?
        .get("content")?
        .as_array()?
        .first()?
        .get("text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(|text| ReplyShape::Nested(text.to_string()))
}

impl RawReplyEnvelope {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a reply body. A body that is not JSON at all is an invalid response,
    /// not a missing-text condition.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map(Self)
            .map_err(|e| AnalysisError::InvalidResponse {
                status: None,
                reason: format!("reply body is not JSON: {}", e),
            })
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Classify the envelope by the first strategy that finds non-empty text.
    pub fn shape(&self) -> ReplyShape {
        STRATEGIES
            .iter()
            .find_map(|strategy| strategy(&self.0))
            .unwrap_or(ReplyShape::Unknown)
    }
}

/// Pull the model's text out of `envelope`, or fail with `NoOutputText`.
pub fn extract_text(envelope: &RawReplyEnvelope) -> Result<String> {
    match envelope.shape() {
        ReplyShape::Flattened(text) | ReplyShape::Nested(text) => Ok(text),
        ReplyShape::Unknown => Err(AnalysisError::NoOutputText),
    }
}
