//! Phase 2 (uniqueness): a contributor appears at most once per cluster.
//!
//! Within a cluster, each contributor keeps only the observation with the
//! smallest core distance; on exact ties the earliest observation in input
//! order is kept. The rest become noise. Labels are only ever demoted.

use std::collections::BTreeMap;

use scriptorium_core::constants::NOISE;
use tracing::debug;

/// Return a copy of `labels` with duplicate contributors demoted to noise.
///
/// # Panics
/// Panics if `core_distances` or `users` is shorter than `labels`.
pub fn enforce_user_uniqueness(
    labels: &[i32],
    core_distances: &[f64],
    users: &[usize],
) -> Vec<i32> {
    debug_assert_eq!(labels.len(), core_distances.len());
    debug_assert_eq!(labels.len(), users.len());

    // label -> user -> observation indices, in input order
    let mut members: BTreeMap<i32, BTreeMap<usize, Vec<usize>>> = BTreeMap::new();
    for (idx, &label) in labels.iter().enumerate() {
        if label >= 0 {
            members
                .entry(label)
                .or_default()
                .entry(users[idx])
                .or_default()
                .push(idx);
        }
    }

    let mut clean = labels.to_vec();
    for (label, by_user) in &members {
        for (user, observations) in by_user {
            let Some((&first, rest)) = observations.split_first() else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            let keep = rest.iter().fold(first, |best, &idx| {
                if core_distances[idx] < core_distances[best] {
                    idx
                } else {
                    best
                }
            });
            for &idx in observations.iter().filter(|&&idx| idx != keep) {
                clean[idx] = NOISE;
            }
            debug!(
                label,
                user,
                kept = keep,
                demoted = rest.len(),
                "demoted duplicate contributor observations to noise"
            );
        }
    }
    clean
}
