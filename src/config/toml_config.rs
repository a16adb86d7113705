use crate::config::{OutputFormat, Settings, MAX_PRECISION};
use crate::core::engine::MAX_PREVIEW_TERMS;
use crate::domain::model::Tolerances;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub tolerances: Option<TolerancesConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TolerancesConfig {
    pub snap_threshold: Option<f64>,
    pub round_trip_tolerance: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub precision: Option<usize>,
    pub verify: Option<bool>,
    pub preview_terms: Option<usize>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(tolerances) = &self.tolerances {
            if let Some(snap) = tolerances.snap_threshold {
                validation::validate_positive_finite("tolerances.snap_threshold", snap)?;
            }
            if let Some(tolerance) = tolerances.round_trip_tolerance {
                validation::validate_positive_finite("tolerances.round_trip_tolerance", tolerance)?;
            }
        }

        if let Some(display) = &self.display {
            if let Some(precision) = display.precision {
                validation::validate_range("display.precision", precision, 0, MAX_PRECISION)?;
            }
            if let Some(preview_terms) = display.preview_terms {
                validation::validate_range(
                    "display.preview_terms",
                    preview_terms,
                    0,
                    MAX_PREVIEW_TERMS,
                )?;
            }
            if let Some(format) = &display.format {
                validation::validate_one_of("display.format", format, OutputFormat::NAMES)?;
            }
        }

        Ok(())
    }

    /// Settings with every key missing from the file left at its default.
    pub fn to_settings(&self) -> Result<Settings> {
        self.validate_config()?;

        let defaults = Settings::default();
        let tolerances = self.tolerances.clone().unwrap_or_default();
        let display = self.display.clone().unwrap_or_default();

        let format = match display.format.as_deref() {
            Some(name) => OutputFormat::from_name(name).unwrap_or(defaults.format),
            None => defaults.format,
        };

        Ok(Settings {
            tolerances: Tolerances {
                snap_threshold: tolerances
                    .snap_threshold
                    .unwrap_or(defaults.tolerances.snap_threshold),
                round_trip_tolerance: tolerances
                    .round_trip_tolerance
                    .unwrap_or(defaults.tolerances.round_trip_tolerance),
            },
            precision: display.precision.unwrap_or(defaults.precision),
            verify: display.verify.unwrap_or(defaults.verify),
            preview_terms: display.preview_terms.unwrap_or(defaults.preview_terms),
            format,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[tolerances]
snap_threshold = 1e-12
round_trip_tolerance = 1e-4

[display]
precision = 3
verify = true
preview_terms = 5
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.to_settings().unwrap();

        assert_eq!(settings.tolerances.snap_threshold, 1e-12);
        assert_eq!(settings.tolerances.round_trip_tolerance, 1e-4);
        assert_eq!(settings.precision, 3);
        assert!(settings.verify);
        assert_eq!(settings.preview_terms, 5);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = TomlConfig::from_toml_str("[tolerances]\nsnap_threshold = 1e-6\n").unwrap();
        let settings = config.to_settings().unwrap();

        assert_eq!(settings.tolerances.snap_threshold, 1e-6);
        assert_eq!(settings.tolerances.round_trip_tolerance, 1e-6);
        assert_eq!(settings.precision, 6);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GEO_RATIO_TEST_PRECISION", "9");

        let toml_content = r#"
[display]
precision = ${GEO_RATIO_TEST_PRECISION}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.display.unwrap().precision, Some(9));

        std::env::remove_var("GEO_RATIO_TEST_PRECISION");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let toml_content = r#"
[display]
format = "${GEO_RATIO_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.display.as_ref().unwrap().format.as_deref(),
            Some("${GEO_RATIO_TEST_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let negative = TomlConfig::from_toml_str("[tolerances]\nround_trip_tolerance = -1.0\n").unwrap();
        assert!(negative.validate().is_err());

        let too_precise = TomlConfig::from_toml_str("[display]\nprecision = 40\n").unwrap();
        assert!(too_precise.validate().is_err());
        assert!(too_precise.to_settings().is_err());

        let too_many_terms =
            TomlConfig::from_toml_str("[display]\npreview_terms = 1000000\n").unwrap();
        assert!(too_many_terms.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(TomlConfig::from_toml_str("[display\nprecision = 3").is_err());
        assert!(TomlConfig::from_toml_str("[display]\nprecision = \"three\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[display]
verify = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.to_settings().unwrap().verify);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/geo-ratio.toml").unwrap_err();
        assert!(matches!(err, crate::utils::error::AppError::Io(_)));
    }
}
