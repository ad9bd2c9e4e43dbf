use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{LineRecord, ObservationKey};
use crate::errors::{ScriptoriumError, ScriptoriumResult};

/// Everything the consensus core needs for one subject (or one frame of it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInput {
    /// Ordered line records; position is the data index.
    pub records: Vec<LineRecord>,
    /// Contributor per record, parallel to `records`.
    pub users: Vec<usize>,
    /// Distinct contributors who looked at the subject.
    pub contributor_count: usize,
}

impl SubjectInput {
    /// Build a subject whose contributor count is the number of distinct user indices.
    pub fn new(records: Vec<LineRecord>, users: Vec<usize>) -> ScriptoriumResult<Self> {
        let contributor_count = users.iter().collect::<BTreeSet<_>>().len();
        Self::with_contributors(records, users, contributor_count)
    }

    /// Build a subject with an explicit contributor count, which may exceed
    /// the users present when some contributors drew no lines.
    pub fn with_contributors(
        records: Vec<LineRecord>,
        users: Vec<usize>,
        contributor_count: usize,
    ) -> ScriptoriumResult<Self> {
        let subject = Self {
            records,
            users,
            contributor_count,
        };
        subject.validate()?;
        Ok(subject)
    }

    /// Check the parallel arrays agree.
    pub fn validate(&self) -> ScriptoriumResult<()> {
        if self.users.len() != self.records.len() {
            return Err(ScriptoriumError::LengthMismatch {
                what: "user indices",
                expected: self.records.len(),
                actual: self.users.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observation keys in data-index order.
    pub fn observations(&self) -> Vec<ObservationKey> {
        self.users
            .iter()
            .enumerate()
            .map(|(data_index, &user_index)| ObservationKey::new(data_index, user_index))
            .collect()
    }
}
