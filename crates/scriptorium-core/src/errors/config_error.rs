/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("invalid config value `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to initialise tracing: {reason}")]
    TracingInit { reason: String },
}
