//! SnapJudge Observability - tracing setup and span helpers shared by the analysis crates.
//!
//! # Quick Start
//!
//! ```no_run
//! use snapjudge_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("snapjudge").with_log_level("snapjudge=debug");
//! init(config)?;
//!
//! tracing::info!("Analyzer ready");
//! # Ok::<(), snapjudge_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `SNAPJUDGE_SERVICE_NAME` or `SERVICE_NAME` - Service name
//! - `SNAPJUDGE_LOG` or `RUST_LOG` - Log level filter
//! - `NO_COLOR` - Disable ANSI colors in console output

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use crate::tracing::{record_duration, record_error};

// Re-exported for the span macros so callers need not name `tracing` themselves.
#[doc(hidden)]
pub use ::tracing as __tracing;
