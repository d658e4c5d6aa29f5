//! Configuration for the analyzer.
//!
//! The credential is passed in explicitly; nothing is stored process-wide.

use crate::credential::ApiCredential;
use crate::error::AnalysisError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for one [`crate::Analyzer`].
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    /// Bearer credential (validated at call time, not here)
    pub api_key: ApiCredential,
    /// API root, without the `/v1/responses` path
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl AnalyzerConfig {
    /// Create a config with default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiCredential::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables.
    ///
    /// Optional: `OPENAI_API_KEY` (absent -> empty key, rejected by `analyze`)
    /// Optional: `SNAPJUDGE_BASE_URL` (default: https://api.openai.com)
    /// Optional: `SNAPJUDGE_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> Result<Self, AnalysisError> {
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("SNAPJUDGE_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(raw) = std::env::var("SNAPJUDGE_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                AnalysisError::Config(format!("SNAPJUDGE_TIMEOUT_SECS must be a number, got {:?}", raw))
            })?;
            config = config.with_timeout_secs(secs);
        }

        Ok(config)
    }

    /// Set base URL (trailing slashes are dropped)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Full Responses API endpoint.
    pub fn responses_url(&self) -> String {
        format!("{}/v1/responses", self.base_url)
    }
}
