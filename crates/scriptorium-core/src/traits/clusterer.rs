use crate::errors::ScriptoriumResult;
use crate::models::ClusterLabeling;

/// Pairwise dissimilarity between two observations, addressed by position.
pub type DissimilarityFn<'a> = dyn Fn(usize, usize) -> f64 + 'a;

/// Density-based clustering with noise detection over a pluggable dissimilarity.
///
/// Implementations must be deterministic for a fixed input ordering and must
/// treat an infinite dissimilarity as "never connect".
pub trait DensityClusterer: Send + Sync {
    /// Label `n` observations. The returned labeling has exactly `n` entries.
    fn cluster(
        &self,
        n: usize,
        dissimilarity: &DissimilarityFn<'_>,
        min_samples: usize,
    ) -> ScriptoriumResult<ClusterLabeling>;

    /// Human-readable clusterer name.
    fn name(&self) -> &str;
}
