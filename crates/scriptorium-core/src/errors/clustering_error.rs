/// Density clustering errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("invalid clustering parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("clusterer `{clusterer}` returned {actual} {what} for {expected} observations")]
    OutputLengthMismatch {
        clusterer: String,
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
