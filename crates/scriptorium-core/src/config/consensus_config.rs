use serde::{Deserialize, Serialize};

use super::defaults;

/// Consensus policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Fixed density threshold. Absent means derive it from the contributor count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_samples: Option<usize>,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
        }
    }
}
