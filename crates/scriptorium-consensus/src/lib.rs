//! # scriptorium-consensus
//!
//! Per-subject consensus pipeline: clustering (OPTICS over a fused
//! endpoint + edit-distance dissimilarity) → per-user uniqueness →
//! aggregation of multi-member clusters → clusters of one for noise.

pub mod algorithms;
pub mod clustering;
pub mod engine;
pub mod observability;
pub mod pipeline;

pub use algorithms::dissimilarity::{dissimilarity, LineDissimilarity};
pub use algorithms::min_samples::min_samples;
pub use algorithms::normalize::strip_tags;
pub use clustering::OpticsClusterer;
pub use engine::ConsensusEngine;
pub use pipeline::phase2_uniqueness::enforce_user_uniqueness;
pub use pipeline::phase3_aggregation::MedianAggregator;
pub use pipeline::phase4_singletons::synthesize_singletons;
pub use pipeline::SubjectConsensus;
