use crate::domain::model::RatioReport;
use crate::utils::error::RatioError;
use serde_json::json;

pub fn render_text(report: &RatioReport, precision: usize) -> String {
    let mut lines = vec![format!("Common ratio: {:.*}", precision, report.ratio)];

    if let Some(verification) = &report.verification {
        lines.push(format!(
            "Round-trip: a1 * r^(n-1) = {:.*} (difference {:e}, tolerance {:e})",
            precision, verification.recomputed, verification.difference, verification.tolerance
        ));
        if verification.within_tolerance {
            lines.push("Round-trip check: OK".to_string());
        } else {
            lines.push(
                "Round-trip check: WARNING, floating-point error exceeds the tolerance".to_string(),
            );
        }
    }

    if !report.terms.is_empty() {
        let terms: Vec<String> = report
            .terms
            .iter()
            .map(|term| format!("{:.*}", precision, term))
            .collect();
        lines.push(format!("Terms: {}", terms.join(", ")));
    }

    lines.join("\n")
}

pub fn render_json(report: &RatioReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_json_error(error: &RatioError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "error": {
            "kind": error.kind(),
            "message": error.to_string(),
            "detail": error.detail(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RatioQuery, Verification};

    fn report() -> RatioReport {
        RatioReport {
            query: RatioQuery::new(1.0, 8.0, 4),
            ratio: 2.0,
            verification: None,
            terms: vec![],
        }
    }

    #[test]
    fn test_render_text_fixed_precision() {
        assert_eq!(render_text(&report(), 6), "Common ratio: 2.000000");
        assert_eq!(render_text(&report(), 0), "Common ratio: 2");
    }

    #[test]
    fn test_render_text_with_extras() {
        let mut report = report();
        report.verification = Some(Verification {
            recomputed: 8.0,
            difference: 0.0,
            tolerance: 1e-6,
            within_tolerance: true,
        });
        report.terms = vec![1.0, 2.0, 4.0, 8.0];

        let text = render_text(&report, 2);
        assert!(text.contains("Round-trip: a1 * r^(n-1) = 8.00"));
        assert!(text.contains("Round-trip check: OK"));
        assert!(text.ends_with("Terms: 1.00, 2.00, 4.00, 8.00"));
    }

    #[test]
    fn test_render_json() {
        let value: serde_json::Value = serde_json::from_str(&render_json(&report()).unwrap()).unwrap();
        assert_eq!(value["ratio"], 2.0);
        assert_eq!(value["query"]["n"], 4);
        assert!(value.get("verification").is_none());
    }

    #[test]
    fn test_render_json_error() {
        let err = RatioError::NoRealRoot {
            quotient: -4.0,
            degree: 2,
        };
        let value: serde_json::Value = serde_json::from_str(&render_json_error(&err).unwrap()).unwrap();
        assert_eq!(value["error"]["kind"], "no_real_root");
        assert!(value["error"]["detail"].is_null());
    }
}
