use serde::{Deserialize, Serialize};

use crate::constants::NOISE;

/// Output of a density clusterer: one label and one core distance per observation.
///
/// A shared non-negative label means shared cluster membership; [`NOISE`] means none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterLabeling {
    pub labels: Vec<i32>,
    pub core_distances: Vec<f64>,
}

impl ClusterLabeling {
    /// Every observation labelled noise, with unbounded core distances.
    pub fn all_noise(n: usize) -> Self {
        Self {
            labels: vec![NOISE; n],
            core_distances: vec![f64::INFINITY; n],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l == NOISE).count()
    }
}
