//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber was already installed, or the subscriber could not be built
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Invalid log filter directive
    #[error("Configuration error: {0}")]
    Config(String),
}
