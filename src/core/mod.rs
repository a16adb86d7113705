pub mod calculator;
pub mod engine;
pub mod render;
pub mod verification;

pub use crate::domain::model::{RatioQuery, RatioReport, Tolerances, Verification};
pub use crate::domain::ports::ToleranceProvider;
pub use crate::utils::error::{RatioError, Result};
