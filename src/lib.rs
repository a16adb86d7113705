pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{OutputFormat, Settings};

pub use crate::core::{
    calculator::{compute, RatioCalculator},
    engine::{EngineOptions, RatioEngine},
    verification::{terms, verify},
};
pub use crate::domain::model::{RatioQuery, RatioReport, Tolerances, Verification};
pub use crate::domain::ports::ToleranceProvider;
pub use crate::utils::error::{AppError, ErrorCategory, ErrorKind, RatioError, Result};
