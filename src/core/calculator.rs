use crate::domain::model::{RatioQuery, Tolerances};
use crate::domain::ports::ToleranceProvider;
use crate::utils::error::RatioError;
use tracing::debug;

/// Computes the common ratio `r = (an / a1)^(1 / (n - 1))` of a geometric sequence.
///
/// Stateless apart from its immutable tolerances, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct RatioCalculator<T: ToleranceProvider = Tolerances> {
    tolerances: T,
}

impl RatioCalculator<Tolerances> {
    pub fn with_defaults() -> Self {
        Self::new(Tolerances::default())
    }
}

impl<T: ToleranceProvider> RatioCalculator<T> {
    pub fn new(tolerances: T) -> Self {
        Self { tolerances }
    }

    pub fn tolerances(&self) -> &T {
        &self.tolerances
    }

    /// Validation happens in a fixed order: index, first term, sign of the
    /// quotient against the root degree. Only then is the root taken.
    pub fn compute(&self, first_term: f64, nth_term: f64, n: i64) -> Result<f64, RatioError> {
        debug!(first_term, nth_term, n, "computing common ratio");

        if n <= 1 {
            return Err(RatioError::InvalidIndex { n });
        }
        if first_term == 0.0 {
            return Err(RatioError::ZeroFirstTerm);
        }

        let degree = n - 1;
        let quotient = nth_term / first_term;

        if quotient < 0.0 && degree % 2 == 0 {
            return Err(RatioError::NoRealRoot { quotient, degree });
        }
        if nth_term == 0.0 {
            return Ok(0.0);
        }

        let ratio = real_root(first_term, nth_term, degree)?;

        if ratio.abs() < self.tolerances.snap_threshold() {
            debug!(ratio, "ratio below snap threshold, reporting 0");
            return Ok(0.0);
        }

        Ok(ratio)
    }

    pub fn compute_query(&self, query: &RatioQuery) -> Result<f64, RatioError> {
        self.compute(query.first_term, query.nth_term, query.n)
    }
}

/// Common ratio with the default snap threshold.
pub fn compute(first_term: f64, nth_term: f64, n: i64) -> Result<f64, RatioError> {
    RatioCalculator::with_defaults().compute(first_term, nth_term, n)
}

/// Real `degree`-th root of `nth_term / first_term`. A negative quotient only
/// reaches here with an odd degree, whose real root keeps the sign.
fn real_root(first_term: f64, nth_term: f64, degree: i64) -> Result<f64, RatioError> {
    if degree == 0 {
        return Err(RatioError::DivisionByZero);
    }

    let quotient = nth_term / first_term;
    if quotient.is_nan() {
        return Err(RatioError::Unknown {
            message: "quotient of the terms is not a number".to_string(),
        });
    }

    let root = if quotient.is_finite() {
        magnitude_root(quotient.abs(), degree)
    } else if first_term.is_finite() && nth_term.is_finite() {
        // quotient left the f64 range, the ratio itself may not have
        magnitude_root(nth_term.abs(), degree) / magnitude_root(first_term.abs(), degree)
    } else {
        return Err(RatioError::Overflow);
    };
    let ratio = if quotient < 0.0 { -root } else { root };

    if ratio.is_nan() {
        return Err(RatioError::Unknown {
            message: format!("root of degree {} of {} is not a number", degree, quotient),
        });
    }
    if ratio.is_infinite() {
        return Err(RatioError::Overflow);
    }

    Ok(ratio)
}

fn magnitude_root(magnitude: f64, degree: i64) -> f64 {
    match degree {
        1 => magnitude,
        2 => magnitude.sqrt(),
        3 => magnitude.cbrt(),
        _ => magnitude.powf(1.0 / degree as f64),
    }
}
