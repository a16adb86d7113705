#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::engine::{EngineOptions, MAX_PREVIEW_TERMS};
use crate::domain::model::Tolerances;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRECISION: usize = 6;
/// Beyond 17 significant decimals an f64 carries no further information.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tolerances: Tolerances,
    pub precision: usize,
    pub verify: bool,
    pub preview_terms: usize,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            precision: DEFAULT_PRECISION,
            verify: false,
            preview_terms: 0,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            verify: self.verify,
            preview_terms: self.preview_terms,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_finite(
            "tolerances.snap_threshold",
            self.tolerances.snap_threshold,
        )?;
        validation::validate_positive_finite(
            "tolerances.round_trip_tolerance",
            self.tolerances.round_trip_tolerance,
        )?;
        validation::validate_range("display.precision", self.precision, 0, MAX_PRECISION)?;
        validation::validate_range(
            "display.preview_terms",
            self.preview_terms,
            0,
            MAX_PREVIEW_TERMS,
        )?;
        Ok(())
    }
}
