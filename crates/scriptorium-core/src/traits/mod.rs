mod aggregator;
mod clusterer;

pub use aggregator::ClusterAggregator;
pub use clusterer::{DensityClusterer, DissimilarityFn};
