use crate::domain::ports::ToleranceProvider;
use serde::Serialize;

pub const DEFAULT_SNAP_THRESHOLD: f64 = 1e-9;
pub const DEFAULT_ROUND_TRIP_TOLERANCE: f64 = 1e-6;

/// One ratio request: the first term, the n-th term and the 1-based index n.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioQuery {
    pub first_term: f64,
    pub nth_term: f64,
    pub n: i64,
}

impl RatioQuery {
    pub fn new(first_term: f64, nth_term: f64, n: i64) -> Self {
        Self {
            first_term,
            nth_term,
            n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub snap_threshold: f64,
    pub round_trip_tolerance: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            round_trip_tolerance: DEFAULT_ROUND_TRIP_TOLERANCE,
        }
    }
}

impl ToleranceProvider for Tolerances {
    fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    fn round_trip_tolerance(&self) -> f64 {
        self.round_trip_tolerance
    }
}

/// Outcome of recomputing the n-th term from a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verification {
    pub recomputed: f64,
    pub difference: f64,
    pub tolerance: f64,
    pub within_tolerance: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioReport {
    pub query: RatioQuery,
    pub ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub terms: Vec<f64>,
}
