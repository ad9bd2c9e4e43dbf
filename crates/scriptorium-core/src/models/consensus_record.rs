use serde::{Deserialize, Serialize};

/// The caller-visible consensus for one document line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusRecord {
    /// `[x_start, x_end]`.
    pub clusters_x: Vec<f64>,
    /// `[y_start, y_end]`.
    pub clusters_y: Vec<f64>,
    /// One inner list per word position holding the words seen there.
    pub clusters_text: Vec<Vec<String>>,
    pub number_views: usize,
    /// Degrees, signed.
    pub line_slope: f64,
    pub consensus_score: f64,
}
