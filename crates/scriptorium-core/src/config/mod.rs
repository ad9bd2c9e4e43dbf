//! Configuration: TOML-backed, every section falls back to defaults.

mod clustering_config;
mod consensus_config;
pub mod defaults;
mod observability_config;

pub use clustering_config::ClusteringConfig;
pub use consensus_config::ConsensusConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ScriptoriumResult};

/// Root configuration for a consensus run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptoriumConfig {
    pub consensus: ConsensusConfig,
    pub clustering: ClusteringConfig,
    pub observability: ObservabilityConfig,
}

impl ScriptoriumConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> ScriptoriumResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> ScriptoriumResult<()> {
        if self.consensus.min_samples == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "consensus.min_samples",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        let eps = self.clustering.eps;
        if eps.is_nan() || eps < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "clustering.eps",
                reason: format!("must be a non-negative number, got {eps}"),
            }
            .into());
        }
        let max_eps = self.clustering.max_eps;
        if max_eps.is_nan() || max_eps < eps {
            return Err(ConfigError::InvalidValue {
                field: "clustering.max_eps",
                reason: format!("must be at least eps ({eps}), got {max_eps}"),
            }
            .into());
        }
        Ok(())
    }
}
