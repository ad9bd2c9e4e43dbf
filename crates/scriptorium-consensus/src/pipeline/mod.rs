//! Per-subject consensus pipeline orchestrator.
//!
//! Phase 1: Clustering → Phase 2: Uniqueness → Phase 3: Aggregation →
//! Phase 4: Singletons
//!
//! Runs strictly in sequence on in-memory input and keeps no state between
//! subjects.

pub mod phase1_clustering;
pub mod phase2_uniqueness;
pub mod phase3_aggregation;
pub mod phase4_singletons;

use scriptorium_core::config::ScriptoriumConfig;
use scriptorium_core::errors::ScriptoriumResult;
use scriptorium_core::models::{ConsensusRecord, SubjectInput};
use scriptorium_core::traits::{ClusterAggregator, DensityClusterer};
use serde::Serialize;
use tracing::info;

/// Consensus output for one subject.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectConsensus {
    /// Aggregated clusters in label order, then clusters of one in input order.
    pub lines: Vec<ConsensusRecord>,
    /// Final labels after uniqueness enforcement, parallel to the input records.
    pub labels: Vec<i32>,
    /// Density threshold the clusterer ran with.
    pub min_samples: usize,
}

/// Run the full 4-phase pipeline on one subject.
pub fn run_pipeline(
    subject: &SubjectInput,
    config: &ScriptoriumConfig,
    clusterer: &dyn DensityClusterer,
    aggregator: &dyn ClusterAggregator,
) -> ScriptoriumResult<SubjectConsensus> {
    // Phase 1: Clustering.
    let outcome =
        phase1_clustering::cluster_subject(subject, config.consensus.min_samples, clusterer)?;
    info!(
        min_samples = outcome.min_samples,
        noise = outcome.labeling.noise_count(),
        "Phase 1: clustering complete"
    );

    // Phase 2: Uniqueness.
    let labels = phase2_uniqueness::enforce_user_uniqueness(
        &outcome.labeling.labels,
        &outcome.labeling.core_distances,
        &subject.users,
    );
    let demoted = labels
        .iter()
        .zip(&outcome.labeling.labels)
        .filter(|(clean, raw)| clean != raw)
        .count();
    info!(demoted, "Phase 2: uniqueness enforced");

    // Phase 3: Aggregation.
    let mut lines = phase3_aggregation::aggregate_clusters(&labels, &subject.records, aggregator)?;
    info!(
        clusters = lines.len(),
        aggregator = aggregator.name(),
        "Phase 3: clusters aggregated"
    );

    // Phase 4: Singletons.
    let noise = phase4_singletons::noise_observations(&labels, &subject.users);
    let singletons = phase4_singletons::synthesize_singletons(&noise, &subject.records)?;
    info!(
        singletons = singletons.len(),
        "Phase 4: clusters of one built"
    );
    lines.extend(singletons);

    Ok(SubjectConsensus {
        lines,
        labels,
        min_samples: outcome.min_samples,
    })
}
