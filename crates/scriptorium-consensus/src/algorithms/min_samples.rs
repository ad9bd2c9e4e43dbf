//! Density threshold policy: the neighbourhood size a cluster needs grows
//! with the number of contributors on the subject.

/// `min_samples` for a subject seen by `contributors` distinct users.
///
/// Above 20 contributors the value is a quarter of the count, truncated.
pub fn min_samples(contributors: usize) -> usize {
    match contributors {
        0..=6 => 2,
        7..=10 => 3,
        11..=15 => 4,
        16..=20 => 5,
        n => n / 4,
    }
}
