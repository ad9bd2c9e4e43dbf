use serde::{Deserialize, Serialize};

use super::defaults;

/// Parameters for the bundled OPTICS clusterer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Reachability above this starts a new cluster or marks noise.
    pub eps: f64,
    /// Points farther apart than this are never neighbours.
    pub max_eps: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            eps: defaults::DEFAULT_EPS,
            max_eps: defaults::DEFAULT_MAX_EPS,
        }
    }
}
