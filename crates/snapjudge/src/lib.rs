//! snapjudge — startup idea feasibility verdicts from a single image.
//!
//! ## Pipeline
//!
//! ```text
//!  DynamicImage ──▶ AnalysisRequest::build ──▶ ReplyTransport::send
//!                    (JPEG q70, data URL,        (POST /v1/responses)
//!                     instructions + image)             │
//!                                                       ▼
//!  AnalysisResult ◀── parse_analysis ◀── extract_text(RawReplyEnvelope)
//!   (Go / No-Go /     (fence strip,       (output_text, then
//!    Maybe)            strict schema)      output[0].content[0].text)
//! ```
//!
//! Each call is independent: no retries, no shared state, one typed error on failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use snapjudge::{Analyzer, AnalyzerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = Analyzer::new(AnalyzerConfig::new(std::env::var("OPENAI_API_KEY")?));
//!     let image = snapjudge::open_image("pitch.png")?;
//!     let result = analyzer.analyze(&image).await?;
//!     println!("{}: {} ({}/100)", result.idea_title(), result.decision(), result.feasibility_score());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod credential;
pub mod encode;
pub mod envelope;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod request;
pub mod transport;
pub mod types;

pub use client::{Analyzer, IdeaAnalyzer};
pub use config::AnalyzerConfig;
pub use credential::ApiCredential;
pub use encode::{decode_image, encode_jpeg, open_image};
pub use envelope::{extract_text, RawReplyEnvelope, ReplyShape};
pub use error::{AnalysisError, Result};
pub use parse::{parse_analysis, strip_code_fence};
pub use prompt::IDEA_EVALUATOR_INSTRUCTIONS;
pub use request::AnalysisRequest;
pub use transport::{HttpTransport, ReplyTransport};
pub use types::{AnalysisResult, Decision};
