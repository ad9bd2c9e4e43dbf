//! Data model shared by extraction, clustering, and aggregation.

mod consensus_record;
mod labeling;
mod line_record;
mod observation;
mod subject;

pub use consensus_record::ConsensusRecord;
pub use labeling::ClusterLabeling;
pub use line_record::{LineRecord, Point};
pub use observation::ObservationKey;
pub use subject::SubjectInput;
