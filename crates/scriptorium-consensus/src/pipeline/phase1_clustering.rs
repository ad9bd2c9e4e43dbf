//! Phase 1 (clustering): density clustering over the fused line dissimilarity.
//!
//! min_samples comes from the config override when set, otherwise from the
//! contributor count.

use scriptorium_core::errors::{ClusteringError, ScriptoriumResult};
use scriptorium_core::models::{ClusterLabeling, SubjectInput};
use scriptorium_core::traits::DensityClusterer;
use tracing::debug;

use crate::algorithms::dissimilarity::LineDissimilarity;
use crate::algorithms::min_samples::min_samples;

/// Raw clusterer output plus the density threshold it ran with.
#[derive(Debug, Clone)]
pub struct ClusteringOutcome {
    pub labeling: ClusterLabeling,
    pub min_samples: usize,
}

/// Cluster one subject's observations.
pub fn cluster_subject(
    subject: &SubjectInput,
    min_samples_override: Option<usize>,
    clusterer: &dyn DensityClusterer,
) -> ScriptoriumResult<ClusteringOutcome> {
    subject.validate()?;

    let min_samples = match min_samples_override {
        Some(value) => value,
        None => min_samples(subject.contributor_count),
    };
    let metric = LineDissimilarity::new(&subject.records, &subject.users);
    let distance = |i: usize, j: usize| metric.between(i, j);

    debug!(
        observations = subject.len(),
        contributors = subject.contributor_count,
        min_samples,
        clusterer = clusterer.name(),
        "clustering subject"
    );
    let labeling = clusterer.cluster(subject.len(), &distance, min_samples)?;
    check_output(clusterer, &labeling, subject.len())?;

    Ok(ClusteringOutcome {
        labeling,
        min_samples,
    })
}

/// The collaborator must label every observation exactly once.
fn check_output(
    clusterer: &dyn DensityClusterer,
    labeling: &ClusterLabeling,
    expected: usize,
) -> ScriptoriumResult<()> {
    let mismatch = |what: &'static str, actual: usize| ClusteringError::OutputLengthMismatch {
        clusterer: clusterer.name().to_string(),
        what,
        expected,
        actual,
    };
    if labeling.labels.len() != expected {
        return Err(mismatch("labels", labeling.labels.len()).into());
    }
    if labeling.core_distances.len() != expected {
        let actual = labeling.core_distances.len();
        return Err(mismatch("core distances", actual).into());
    }
    Ok(())
}
