//! Default values for every configuration field.

/// `None` selects min_samples from the contributor count.
pub const DEFAULT_MIN_SAMPLES: Option<usize> = None;

/// Extraction radius over the reachability ordering.
pub const DEFAULT_EPS: f64 = 50.0;

/// Neighbourhood cap while building the ordering (unbounded).
pub const DEFAULT_MAX_EPS: f64 = f64::INFINITY;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
