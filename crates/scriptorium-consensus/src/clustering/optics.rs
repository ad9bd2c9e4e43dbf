//! OPTICS ordering with DBSCAN-style label extraction.
//!
//! Distances are requested on demand; the pairwise matrix is never stored.
//! Every tie is broken by the lower observation index, so labels depend only
//! on the input ordering.

use scriptorium_core::config::ClusteringConfig;
use scriptorium_core::constants::NOISE;
use scriptorium_core::errors::{ClusteringError, ScriptoriumResult};
use scriptorium_core::models::ClusterLabeling;
use scriptorium_core::traits::{DensityClusterer, DissimilarityFn};
use tracing::debug;

/// OPTICS over an arbitrary dissimilarity.
#[derive(Debug, Clone)]
pub struct OpticsClusterer {
    /// Extraction radius.
    eps: f64,
    /// Neighbourhood cap while ordering.
    max_eps: f64,
}

/// Reachability plot produced by the ordering pass.
#[derive(Debug, Clone)]
pub struct ReachabilityPlot {
    pub ordering: Vec<usize>,
    pub reachability: Vec<f64>,
    pub core_distances: Vec<f64>,
}

impl OpticsClusterer {
    pub fn new(eps: f64, max_eps: f64) -> Self {
        Self { eps, max_eps }
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self::new(config.eps, config.max_eps)
    }

    /// Build the reachability ordering.
    pub fn order(
        &self,
        n: usize,
        dissimilarity: &DissimilarityFn<'_>,
        min_samples: usize,
    ) -> ReachabilityPlot {
        let core_distances = self.core_distances(n, dissimilarity, min_samples);
        let mut reachability = vec![f64::INFINITY; n];
        let mut processed = vec![false; n];
        let mut ordering = Vec::with_capacity(n);

        for _ in 0..n {
            // Smallest reachability among unprocessed points, lowest index on ties.
            let next = (0..n)
                .filter(|&i| !processed[i])
                .fold(None, |best: Option<usize>, i| match best {
                    Some(b) if reachability[b] <= reachability[i] => Some(b),
                    _ => Some(i),
                });
            let Some(point) = next else { break };

            processed[point] = true;
            ordering.push(point);

            let core = core_distances[point];
            if core.is_infinite() {
                continue;
            }
            for other in (0..n).filter(|&i| !processed[i]) {
                let d = dissimilarity(point, other);
                if d > self.max_eps {
                    continue;
                }
                let reach = d.max(core);
                if reach < reachability[other] {
                    reachability[other] = reach;
                }
            }
        }

        ReachabilityPlot {
            ordering,
            reachability,
            core_distances,
        }
    }

    /// Distance to the `min_samples`-th nearest observation, counting the point itself.
    fn core_distances(
        &self,
        n: usize,
        dissimilarity: &DissimilarityFn<'_>,
        min_samples: usize,
    ) -> Vec<f64> {
        if min_samples > n {
            return vec![f64::INFINITY; n];
        }
        (0..n)
            .map(|i| {
                let mut row: Vec<f64> = (0..n).map(|j| dissimilarity(i, j)).collect();
                row.sort_by(f64::total_cmp);
                let core = row[min_samples.max(1) - 1];
                if core > self.max_eps {
                    f64::INFINITY
                } else {
                    core
                }
            })
            .collect()
    }

    /// Walk the ordering: a far-reached core point opens a new cluster, a
    /// far-reached non-core point is noise, anything else joins the open cluster.
    fn extract_labels(&self, plot: &ReachabilityPlot) -> Vec<i32> {
        let mut labels = vec![NOISE; plot.reachability.len()];
        let mut current = NOISE;
        for &point in &plot.ordering {
            let far = plot.reachability[point] > self.eps;
            let core = plot.core_distances[point] <= self.eps;
            if far {
                if core {
                    current += 1;
                    labels[point] = current;
                }
            } else {
                labels[point] = current;
            }
        }
        labels
    }
}

impl Default for OpticsClusterer {
    fn default() -> Self {
        Self::from_config(&ClusteringConfig::default())
    }
}

impl DensityClusterer for OpticsClusterer {
    fn cluster(
        &self,
        n: usize,
        dissimilarity: &DissimilarityFn<'_>,
        min_samples: usize,
    ) -> ScriptoriumResult<ClusterLabeling> {
        if min_samples == 0 {
            return Err(ClusteringError::InvalidParameter {
                parameter: "min_samples",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if min_samples > n {
            debug!(n, min_samples, "too few observations, all noise");
            return Ok(ClusterLabeling::all_noise(n));
        }

        let plot = self.order(n, dissimilarity, min_samples);
        let labels = self.extract_labels(&plot);
        Ok(ClusterLabeling {
            labels,
            core_distances: plot.core_distances,
        })
    }

    fn name(&self) -> &str {
        "optics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Points on a line; distance is absolute difference.
    fn line_distance(points: &[f64]) -> impl Fn(usize, usize) -> f64 + '_ {
        move |i, j| (points[i] - points[j]).abs()
    }

    #[test]
    fn two_dense_groups_and_an_outlier() {
        let points = [0.0, 0.5, 1.0, 20.0, 20.5, 21.0, 100.0];
        let clusterer = OpticsClusterer::new(2.0, f64::INFINITY);
        let result = clusterer.cluster(points.len(), &line_distance(&points), 2).unwrap();

        assert_eq!(result.labels[0], result.labels[1]);
        assert_eq!(result.labels[1], result.labels[2]);
        assert_eq!(result.labels[3], result.labels[4]);
        assert_eq!(result.labels[4], result.labels[5]);
        assert_ne!(result.labels[0], result.labels[3]);
        assert!(result.labels[0] >= 0 && result.labels[3] >= 0);
        assert_eq!(result.labels[6], NOISE);
    }

    #[test]
    fn core_distance_counts_the_point_itself() {
        let points = [0.0, 1.0, 3.0];
        let clusterer = OpticsClusterer::new(10.0, f64::INFINITY);
        let result = clusterer.cluster(3, &line_distance(&points), 2).unwrap();
        assert_eq!(result.core_distances, vec![1.0, 1.0, 2.0]);
    }

    #[test]
    fn min_samples_above_n_is_all_noise() {
        let points = [0.0, 0.1];
        let clusterer = OpticsClusterer::default();
        let result = clusterer.cluster(2, &line_distance(&points), 3).unwrap();
        assert_eq!(result.labels, vec![NOISE, NOISE]);
        assert!(result.core_distances.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn zero_min_samples_is_rejected() {
        let points = [0.0];
        let clusterer = OpticsClusterer::default();
        assert!(clusterer.cluster(1, &line_distance(&points), 0).is_err());
    }

    #[test]
    fn infinite_distances_never_connect() {
        let clusterer = OpticsClusterer::new(5.0, f64::INFINITY);
        let dist = |i: usize, j: usize| if i == j { 0.0 } else { f64::INFINITY };
        let result = clusterer.cluster(4, &dist, 2).unwrap();
        assert_eq!(result.labels, vec![NOISE; 4]);
    }

    #[test]
    fn ordering_visits_every_point_once() {
        let points = [5.0, 0.0, 9.0, 1.0];
        let clusterer = OpticsClusterer::new(3.0, f64::INFINITY);
        let plot = clusterer.order(4, &line_distance(&points), 2);
        let mut seen = plot.ordering.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(plot.ordering[0], 0);
    }

    #[test]
    fn max_eps_caps_core_distances() {
        let points = [0.0, 10.0];
        let clusterer = OpticsClusterer::new(1.0, 5.0);
        let result = clusterer.cluster(2, &line_distance(&points), 2).unwrap();
        assert!(result.core_distances.iter().all(|d| d.is_infinite()));
        assert_eq!(result.labels, vec![NOISE, NOISE]);
    }
}
