use super::{ClusteringError, ConfigError, ExtractionError, MalformedRecordError};

/// Convenience alias used across the workspace.
pub type ScriptoriumResult<T> = Result<T, ScriptoriumError>;

/// Top-level error for a per-subject reduction.
///
/// A failing subject aborts on its own; nothing here carries state across subjects.
#[derive(Debug, thiserror::Error)]
pub enum ScriptoriumError {
    #[error("malformed line record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: MalformedRecordError,
    },

    #[error("observation {index} references a missing line record ({available} available)")]
    MissingRecord { index: usize, available: usize },

    #[error("length mismatch: {what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    ClusteringError(#[from] ClusteringError),

    #[error(transparent)]
    ExtractionError(#[from] ExtractionError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
