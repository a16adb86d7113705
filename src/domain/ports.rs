/// Source of the heuristic constants used by the calculator and the round-trip check.
pub trait ToleranceProvider: Send + Sync {
    /// Computed ratios with an absolute value below this are reported as exactly `0.0`.
    fn snap_threshold(&self) -> f64;

    /// Maximum accepted `|a1 * r^(n-1) - an|` for the round-trip check.
    fn round_trip_tolerance(&self) -> f64;
}
