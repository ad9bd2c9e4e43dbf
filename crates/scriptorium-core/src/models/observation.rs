use serde::{Deserialize, Serialize};

/// Identifies one submission and the contributor who made it.
///
/// `data_index` is unique per observation on a subject; `user_index` is
/// shared by every observation from the same contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObservationKey {
    pub data_index: usize,
    pub user_index: usize,
}

impl ObservationKey {
    pub fn new(data_index: usize, user_index: usize) -> Self {
        Self {
            data_index,
            user_index,
        }
    }
}
