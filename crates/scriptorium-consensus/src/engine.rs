//! ConsensusEngine: config plus the two collaborators, applied per subject.

use scriptorium_core::config::ScriptoriumConfig;
use scriptorium_core::errors::ScriptoriumResult;
use scriptorium_core::models::SubjectInput;
use scriptorium_core::traits::{ClusterAggregator, DensityClusterer};

use crate::clustering::OpticsClusterer;
use crate::pipeline::phase3_aggregation::MedianAggregator;
use crate::pipeline::{self, SubjectConsensus};
use crate::subject_span;

/// Reduces subjects to consensus lines.
///
/// Holds no per-subject state, so one engine can serve any number of
/// subjects, including from several threads at once.
pub struct ConsensusEngine {
    config: ScriptoriumConfig,
    clusterer: Box<dyn DensityClusterer>,
    aggregator: Box<dyn ClusterAggregator>,
}

impl ConsensusEngine {
    /// Engine with the bundled OPTICS clusterer and median aggregator.
    pub fn new(config: ScriptoriumConfig) -> ScriptoriumResult<Self> {
        let clusterer = OpticsClusterer::from_config(&config.clustering);
        Self::with_collaborators(config, Box::new(clusterer), Box::new(MedianAggregator))
    }

    /// Engine with caller-supplied clustering and aggregation.
    pub fn with_collaborators(
        config: ScriptoriumConfig,
        clusterer: Box<dyn DensityClusterer>,
        aggregator: Box<dyn ClusterAggregator>,
    ) -> ScriptoriumResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clusterer,
            aggregator,
        })
    }

    /// Reduce one subject. A failure here affects this subject only.
    pub fn reduce(&self, subject: &SubjectInput) -> ScriptoriumResult<SubjectConsensus> {
        let span = subject_span!(subject.len(), subject.contributor_count);
        let _guard = span.enter();
        pipeline::run_pipeline(
            subject,
            &self.config,
            self.clusterer.as_ref(),
            self.aggregator.as_ref(),
        )
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self {
            config: ScriptoriumConfig::default(),
            clusterer: Box::new(OpticsClusterer::default()),
            aggregator: Box::new(MedianAggregator),
        }
    }
}
