//! Error types for the analysis pipeline.

use thiserror::Error;

/// Every way a single `analyze` call can fail. Each variant is terminal for that call.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Credential is empty or still a placeholder
    #[error("OpenAI API key is missing. Set OPENAI_API_KEY or pass a key to AnalyzerConfig::new.")]
    MissingApiKey,

    /// Image could not be decoded or encoded to JPEG
    #[error("Could not convert image to JPEG data: {0}")]
    InvalidImage(String),

    /// Non-2xx status, or a reply body that is not JSON at all
    #[error("Received an invalid response from the AI ({reason})")]
    InvalidResponse { status: Option<u16>, reason: String },

    /// No non-empty text in any known reply shape
    #[error("AI did not return any output text.")]
    NoOutputText,

    /// Output text is malformed JSON or does not match the result schema
    #[error("AI output was not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Network-level failure (DNS, TLS, connection reset, ...)
    #[error("Request to the AI failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request to the AI timed out after {0}s")]
    Timeout(u64),

    /// Malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        AnalysisError::InvalidResponse {
            status: Some(status.as_u16()),
            reason: format!("HTTP {}", status),
        }
    }

    /// Whether issuing a fresh call might succeed. The pipeline never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalysisError::Transport(_) | AnalysisError::Timeout(_) => true,
            AnalysisError::InvalidResponse {
                status: Some(status),
                ..
            } => *status == 429 || *status >= 500,
            // Model output varies between calls
            AnalysisError::NoOutputText | AnalysisError::InvalidJson(_) => true,
            _ => false,
        }
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
