//! Error types: one workspace-level enum wrapping per-subsystem errors.

mod clustering_error;
mod config_error;
mod extraction_error;
mod record_error;
mod scriptorium_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use extraction_error::ExtractionError;
pub use record_error::MalformedRecordError;
pub use scriptorium_error::{ScriptoriumError, ScriptoriumResult};
