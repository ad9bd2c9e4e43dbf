use crate::errors::ScriptoriumResult;
use crate::models::{ConsensusRecord, LineRecord};

/// Turns the members of one multi-member cluster into a consensus record.
pub trait ClusterAggregator: Send + Sync {
    /// `members` are the cluster's line records in input order; never empty.
    fn aggregate(&self, members: &[&LineRecord]) -> ScriptoriumResult<ConsensusRecord>;

    /// Human-readable aggregator name.
    fn name(&self) -> &str;
}
