//! Configuration for logging

use serde::{Deserialize, Serialize};

fn default_service_name() -> String {
    "snapjudge".to_string()
}

fn default_true() -> bool {
    true
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup log line (e.g. "snapjudge", "snapjudge-ios-bridge")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log filter directive (e.g. "info", "snapjudge=debug").
    /// Falls back to `RUST_LOG`, then "info", when unset.
    pub log_level: Option<String>,

    /// Emit formatted events to stderr
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Colorize console output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: None,
            enable_console: true,
            ansi: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Enable or disable ANSI colors
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.ansi = enable;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `SNAPJUDGE_SERVICE_NAME` or `SERVICE_NAME` → service_name
    /// - `SNAPJUDGE_LOG` or `RUST_LOG` → log_level
    /// - `NO_COLOR` (any value) → ansi = false
    pub fn from_env() -> Self {
        let service_name = std::env::var("SNAPJUDGE_SERVICE_NAME")
            .or_else(|_| std::env::var("SERVICE_NAME"))
            .unwrap_or_else(|_| default_service_name());

        let log_level = std::env::var("SNAPJUDGE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        Self {
            service_name,
            log_level,
            enable_console: true,
            ansi: std::env::var_os("NO_COLOR").is_none(),
        }
    }
}
