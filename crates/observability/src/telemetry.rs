//! Subscriber initialization: env filter + console fmt layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Install the global tracing subscriber for the given configuration.
///
/// Returns `ObservabilityError::InitFailed` if a global subscriber is already set,
/// so calling this twice (e.g. from several tests) is harmless.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = match config.log_level.as_deref() {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|e| ObservabilityError::Config(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_ansi(config.ansi).with_target(true));

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::info!(service.name = %config.service_name, "Tracing initialized");
    Ok(())
}

/// Initialize with configuration read from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
