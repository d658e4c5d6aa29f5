//! Analyzer: runs build -> transport -> extract -> parse for one image.

use std::time::Instant;

use async_trait::async_trait;
use image::DynamicImage;
use snapjudge_observability::{analysis_span, record_duration, record_error};
use tracing::{debug, info, Instrument, Span};

use crate::config::AnalyzerConfig;
use crate::encode::decode_image;
use crate::envelope::extract_text;
use crate::error::{AnalysisError, Result};
use crate::parse::parse_analysis;
use crate::prompt::IDEA_EVALUATOR_INSTRUCTIONS;
use crate::request::{AnalysisRequest, MODEL};
use crate::transport::{HttpTransport, ReplyTransport};
use crate::types::AnalysisResult;

/// Anything that can turn an idea image into a verdict.
#[async_trait]
pub trait IdeaAnalyzer: Send + Sync {
    async fn analyze(&self, image: &DynamicImage) -> Result<AnalysisResult>;
}

/// Explicitly constructed analyzer. Holds no state between calls; each call is a
/// single attempt that either yields a result or one typed error.
pub struct Analyzer<T = HttpTransport> {
    config: AnalyzerConfig,
    transport: T,
}

impl Analyzer<HttpTransport> {
    /// Analyzer talking HTTPS to the configured endpoint.
    pub fn new(config: AnalyzerConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self { config, transport }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AnalyzerConfig::from_env()?))
    }
}

impl<T: ReplyTransport> Analyzer<T> {
    /// Analyzer over a caller-supplied transport.
    pub fn with_transport(config: AnalyzerConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Analyze one in-memory image.
    pub async fn analyze(&self, image: &DynamicImage) -> Result<AnalysisResult> {
        let span = analysis_span!(MODEL);
        self.run(image).instrument(span).await
    }

    /// Decode raw image file bytes, then analyze.
    pub async fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisResult> {
        let image = decode_image(bytes)?;
        self.analyze(&image).await
    }

    async fn run(&self, image: &DynamicImage) -> Result<AnalysisResult> {
        let started = Instant::now();
        let outcome = self.pipeline(image).await;
        record_duration("duration_ms", started.elapsed());

        match &outcome {
            Ok(result) => {
                Span::current().record("decision", result.decision().as_str());
                info!(
                    idea = result.idea_title(),
                    score = result.feasibility_score(),
                    decision = %result.decision(),
                    "Analysis complete"
                );
            }
            Err(e) => record_error(e),
        }
        outcome
    }

    async fn pipeline(&self, image: &DynamicImage) -> Result<AnalysisResult> {
        if !self.config.api_key.is_usable() {
            return Err(AnalysisError::MissingApiKey);
        }

        let request = AnalysisRequest::build(image, IDEA_EVALUATOR_INSTRUCTIONS)?;
        debug!(request = %request.describe(), "Built analysis request");

        let envelope = self.transport.send(&request).await?;
        let text = extract_text(&envelope)?;
        debug!(chars = text.len(), "Extracted output text");

        parse_analysis(&text)
    }
}

#[async_trait]
impl<T: ReplyTransport> IdeaAnalyzer for Analyzer<T> {
    async fn analyze(&self, image: &DynamicImage) -> Result<AnalysisResult> {
        Analyzer::analyze(self, image).await
    }
}
