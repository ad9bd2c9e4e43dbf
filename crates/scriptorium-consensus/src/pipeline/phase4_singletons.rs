//! Phase 4 (singletons): every noise observation becomes a cluster of one,
//! so no submitted line is dropped from the output.

use scriptorium_core::constants::{NOISE, SINGLETON_CONSENSUS_SCORE, SINGLETON_VIEWS};
use scriptorium_core::errors::{ScriptoriumError, ScriptoriumResult};
use scriptorium_core::models::{ConsensusRecord, LineRecord, ObservationKey};

/// Observations labelled noise, in input order.
pub fn noise_observations(labels: &[i32], users: &[usize]) -> Vec<ObservationKey> {
    labels
        .iter()
        .zip(users)
        .enumerate()
        .filter(|&(_, (&label, _))| label == NOISE)
        .map(|(data_index, (_, &user_index))| ObservationKey::new(data_index, user_index))
        .collect()
}

/// Build one standalone consensus record per observation.
///
/// Endpoints are copied as drawn and the raw transcription (tags included)
/// is split into single-word columns.
pub fn synthesize_singletons(
    observations: &[ObservationKey],
    records: &[LineRecord],
) -> ScriptoriumResult<Vec<ConsensusRecord>> {
    observations
        .iter()
        .map(|key| -> ScriptoriumResult<ConsensusRecord> {
            let line = records
                .get(key.data_index)
                .ok_or(ScriptoriumError::MissingRecord {
                    index: key.data_index,
                    available: records.len(),
                })?;
            Ok(cluster_of_one(line))
        })
        .collect()
}

fn cluster_of_one(line: &LineRecord) -> ConsensusRecord {
    ConsensusRecord {
        clusters_x: line.xs().to_vec(),
        clusters_y: line.ys().to_vec(),
        clusters_text: line
            .text()
            .split_whitespace()
            .map(|word| vec![word.to_string()])
            .collect(),
        number_views: SINGLETON_VIEWS,
        line_slope: line.slope_degrees(),
        consensus_score: SINGLETON_CONSENSUS_SCORE,
    }
}
