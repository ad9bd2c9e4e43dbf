/// Scriptorium version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cluster label assigned to observations outside every density cluster.
pub const NOISE: i32 = -1;

/// Dissimilarity between two distinct observations from the same contributor.
/// Clusterers must treat it as "never connect".
pub const SAME_USER_DISSIMILARITY: f64 = f64::INFINITY;

/// Number of views recorded on a cluster of one.
pub const SINGLETON_VIEWS: usize = 1;

/// Consensus score recorded on a cluster of one.
pub const SINGLETON_CONSENSUS_SCORE: f64 = 1.0;
