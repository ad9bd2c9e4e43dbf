//! # scriptorium-core
//!
//! Foundation crate for line-text consensus.
//! Defines the data model, seam traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScriptoriumConfig;
pub use errors::{ScriptoriumError, ScriptoriumResult};
pub use models::{
    ClusterLabeling, ConsensusRecord, LineRecord, ObservationKey, Point, SubjectInput,
};
pub use traits::{ClusterAggregator, DensityClusterer};
