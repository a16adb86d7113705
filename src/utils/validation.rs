use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than 0".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_finite() {
        assert!(validate_positive_finite("tolerances.snap_threshold", 1e-9).is_ok());
        assert!(validate_positive_finite("tolerances.snap_threshold", 0.0).is_err());
        assert!(validate_positive_finite("tolerances.snap_threshold", -1.0).is_err());
        assert!(validate_positive_finite("tolerances.snap_threshold", f64::NAN).is_err());
        assert!(validate_positive_finite("tolerances.snap_threshold", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "geo-ratio.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("display.precision", 6usize, 0, 17).is_ok());
        assert!(validate_range("display.precision", 18usize, 0, 17).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("display.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("display.format", "yaml", &["text", "json"]).is_err());
    }
}
