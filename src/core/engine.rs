use crate::core::calculator::RatioCalculator;
use crate::core::verification::{terms, verify};
use crate::domain::model::{RatioQuery, RatioReport};
use crate::domain::ports::ToleranceProvider;
use crate::utils::error::RatioError;

/// Upper bound on the number of previewed terms.
pub const MAX_PREVIEW_TERMS: usize = 1_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub verify: bool,
    pub preview_terms: usize,
}

/// Runs one request end to end: compute, then the optional round-trip check
/// and term preview.
pub struct RatioEngine<T: ToleranceProvider> {
    calculator: RatioCalculator<T>,
    options: EngineOptions,
}

impl<T: ToleranceProvider> RatioEngine<T> {
    pub fn new(calculator: RatioCalculator<T>, options: EngineOptions) -> Self {
        Self {
            calculator,
            options,
        }
    }

    pub fn run(&self, query: RatioQuery) -> Result<RatioReport, RatioError> {
        tracing::debug!(?query, "Starting ratio computation");

        let ratio = match self.calculator.compute_query(&query) {
            Ok(ratio) => ratio,
            Err(e) => {
                tracing::debug!(kind = ?e.kind(), "Ratio computation rejected: {}", e);
                return Err(e);
            }
        };
        tracing::debug!(ratio, "Common ratio computed");

        let verification = self.options.verify.then(|| {
            let tolerance = self.calculator.tolerances().round_trip_tolerance();
            let verification = verify(&query, ratio, tolerance);
            if !verification.within_tolerance {
                tracing::warn!(
                    "Round-trip mismatch: a1 * r^(n-1) = {} differs from {} by {} (tolerance {})",
                    verification.recomputed,
                    query.nth_term,
                    verification.difference,
                    tolerance
                );
            }
            verification
        });

        let limit = self.options.preview_terms.min(MAX_PREVIEW_TERMS);
        let count = usize::try_from(query.n).map_or(limit, |n| n.min(limit));
        let terms = terms(query.first_term, ratio, count);

        Ok(RatioReport {
            query,
            ratio,
            verification,
            terms,
        })
    }
}
