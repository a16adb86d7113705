use crate::domain::model::{RatioQuery, Verification};

/// Recomputes the n-th term as `a1 * r^(n-1)` and compares it with the requested one.
pub fn verify(query: &RatioQuery, ratio: f64, tolerance: f64) -> Verification {
    let recomputed = query.first_term * ratio.powf((query.n - 1) as f64);
    let difference = (recomputed - query.nth_term).abs();

    Verification {
        recomputed,
        difference,
        tolerance,
        within_tolerance: difference <= tolerance,
    }
}

/// First `count` terms `a1, a1*r, a1*r^2, ...` of the sequence.
pub fn terms(first_term: f64, ratio: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|k| first_term * ratio.powf(k as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_exact_ratio() {
        let query = RatioQuery::new(1.0, 8.0, 4);
        let verification = verify(&query, 2.0, 1e-6);

        assert_eq!(verification.recomputed, 8.0);
        assert_eq!(verification.difference, 0.0);
        assert!(verification.within_tolerance);
    }

    #[test]
    fn test_verify_negative_ratio_odd_degree() {
        let query = RatioQuery::new(1.0, -8.0, 4);
        let verification = verify(&query, -2.0, 1e-6);

        assert_eq!(verification.recomputed, -8.0);
        assert!(verification.within_tolerance);
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let query = RatioQuery::new(1.0, 8.0, 4);
        let verification = verify(&query, 2.1, 1e-6);

        assert!(!verification.within_tolerance);
        assert!((verification.difference - 1.261).abs() < 1e-9);
    }

    #[test]
    fn test_verify_nan_is_never_within_tolerance() {
        let query = RatioQuery::new(1.0, 8.0, 4);
        assert!(!verify(&query, f64::NAN, 1e-6).within_tolerance);
    }

    #[test]
    fn test_terms() {
        assert_eq!(terms(3.0, 2.0, 4), vec![3.0, 6.0, 12.0, 24.0]);
        assert_eq!(terms(1.0, -2.0, 3), vec![1.0, -2.0, 4.0]);
        assert!(terms(1.0, 2.0, 0).is_empty());
    }
}
