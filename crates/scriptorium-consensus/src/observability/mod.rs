//! Structured logging: subscriber setup and per-subject spans.

use scriptorium_core::config::ObservabilityConfig;
use scriptorium_core::errors::{ConfigError, ScriptoriumResult};
use tracing_subscriber::EnvFilter;

/// Create the span wrapping one subject's reduction.
#[macro_export]
macro_rules! subject_span {
    ($observations:expr, $contributors:expr) => {
        tracing::info_span!(
            "scriptorium.subject",
            observations = $observations,
            contributors = $contributors
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUBJECT: &str = "scriptorium.subject";
}

/// Install a global fmt subscriber. Fails if one is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> ScriptoriumResult<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::InvalidValue {
        field: "observability.log_level",
        reason: e.to_string(),
    })?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| {
        ConfigError::TracingInit {
            reason: e.to_string(),
        }
        .into()
    })
}
