//! Fused line dissimilarity: start-to-start distance + end-to-end distance +
//! edit distance between tag-stripped transcriptions.
//!
//! Not a metric. Distinct observations from one contributor are infinitely
//! far apart so a contributor's own submissions can never cluster together.

use scriptorium_core::constants::SAME_USER_DISSIMILARITY;
use scriptorium_core::models::{LineRecord, ObservationKey};

use super::normalize::strip_tags;

/// Dissimilarity between observations `a` and `b`.
///
/// # Panics
/// Panics if either data index is out of range for `records`.
pub fn dissimilarity(a: ObservationKey, b: ObservationKey, records: &[LineRecord]) -> f64 {
    if a.data_index == b.data_index {
        return 0.0;
    }
    if a.user_index == b.user_index {
        return SAME_USER_DISSIMILARITY;
    }
    let line_a = &records[a.data_index];
    let line_b = &records[b.data_index];
    endpoint_distance(line_a, line_b)
        + strsim::levenshtein(&strip_tags(line_a.text()), &strip_tags(line_b.text())) as f64
}

/// Sum of per-endpoint Euclidean distances.
fn endpoint_distance(a: &LineRecord, b: &LineRecord) -> f64 {
    a.start().distance(&b.start()) + a.end().distance(&b.end())
}

/// Per-subject dissimilarity with normalised text computed once per record.
///
/// Lives no longer than the subject it was built from.
pub struct LineDissimilarity<'a> {
    records: &'a [LineRecord],
    users: &'a [usize],
    normalized: Vec<String>,
}

impl<'a> LineDissimilarity<'a> {
    /// `users` must be parallel to `records`.
    pub fn new(records: &'a [LineRecord], users: &'a [usize]) -> Self {
        debug_assert_eq!(records.len(), users.len());
        let normalized = records.iter().map(|r| strip_tags(r.text())).collect();
        Self {
            records,
            users,
            normalized,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Same result as [`dissimilarity`] for the observations at positions `i` and `j`.
    pub fn between(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        if self.users[i] == self.users[j] {
            return SAME_USER_DISSIMILARITY;
        }
        endpoint_distance(&self.records[i], &self.records[j])
            + strsim::levenshtein(&self.normalized[i], &self.normalized[j]) as f64
    }
}
