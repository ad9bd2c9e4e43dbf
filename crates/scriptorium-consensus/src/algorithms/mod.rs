//! Consensus algorithms: tag stripping, fused line dissimilarity, density threshold policy.

pub mod dissimilarity;
pub mod min_samples;
pub mod normalize;
