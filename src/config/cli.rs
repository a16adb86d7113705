use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings};
use crate::domain::model::RatioQuery;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "geo-ratio")]
#[command(about = "Compute the common ratio of a geometric sequence from its first and n-th terms")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// First term of the sequence (a1)
    #[arg(short = 'a', long)]
    pub first_term: f64,

    /// n-th term of the sequence (an)
    #[arg(short = 'b', long)]
    pub nth_term: f64,

    /// Position n of the n-th term (must be greater than 1)
    #[arg(short = 'n', long = "index")]
    pub index: i64,

    /// Decimal places shown for the ratio
    #[arg(long)]
    pub precision: Option<usize>,

    /// Recompute the n-th term from the ratio and compare
    #[arg(long)]
    pub verify: bool,

    /// Show up to this many leading terms of the sequence
    #[arg(long)]
    pub terms: Option<usize>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Ratios with a smaller magnitude are reported as 0
    #[arg(long)]
    pub snap_threshold: Option<f64>,

    /// Round-trip tolerance used by --verify
    #[arg(long)]
    pub tolerance: Option<f64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn query(&self) -> RatioQuery {
        RatioQuery::new(self.first_term, self.nth_term, self.index)
    }

    /// Flags override the configuration file, which overrides the defaults.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_settings()?
            }
            None => Settings::default(),
        };

        if let Some(snap) = self.snap_threshold {
            settings.tolerances.snap_threshold = snap;
        }
        if let Some(tolerance) = self.tolerance {
            settings.tolerances.round_trip_tolerance = tolerance;
        }
        if let Some(precision) = self.precision {
            settings.precision = precision;
        }
        if self.verify {
            settings.verify = true;
        }
        if let Some(terms) = self.terms {
            settings.preview_terms = terms;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}
