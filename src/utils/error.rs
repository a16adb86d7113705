use serde::Serialize;
use thiserror::Error;

/// Classification tag of a failed ratio computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidIndex,
    ZeroFirstTerm,
    NoRealRoot,
    DivisionByZero,
    Overflow,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

impl ErrorCategory {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Input => 1,
            ErrorCategory::Arithmetic => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatioError {
    #[error("index must be greater than 1, got {n}")]
    InvalidIndex { n: i64 },

    #[error("first term must not be zero")]
    ZeroFirstTerm,

    #[error("no real root: quotient {quotient} is negative and root degree {degree} is even")]
    NoRealRoot { quotient: f64, degree: i64 },

    #[error("division by zero while computing the ratio")]
    DivisionByZero,

    #[error("ratio exceeds the representable range")]
    Overflow,

    #[error("ratio computation failed: {message}")]
    Unknown { message: String },
}

impl RatioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RatioError::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            RatioError::ZeroFirstTerm => ErrorKind::ZeroFirstTerm,
            RatioError::NoRealRoot { .. } => ErrorKind::NoRealRoot,
            RatioError::DivisionByZero => ErrorKind::DivisionByZero,
            RatioError::Overflow => ErrorKind::Overflow,
            RatioError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            ErrorKind::InvalidIndex | ErrorKind::ZeroFirstTerm | ErrorKind::NoRealRoot => {
                ErrorCategory::Input
            }
            ErrorKind::DivisionByZero | ErrorKind::Overflow | ErrorKind::Unknown => {
                ErrorCategory::Arithmetic
            }
        }
    }

    /// Underlying fault description, only present for `Unknown`.
    pub fn detail(&self) -> Option<&str> {
        match self {
            RatioError::Unknown { message } => Some(message),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RatioError::InvalidIndex { .. } => {
                "n must be an integer greater than 1 (the first and n-th term cannot be the same term)."
                    .to_string()
            }
            RatioError::ZeroFirstTerm => "The first term cannot be 0.".to_string(),
            RatioError::NoRealRoot { .. } => {
                "An even root of a negative ratio has no real common ratio.".to_string()
            }
            RatioError::DivisionByZero => {
                "Division by zero occurred while computing the ratio.".to_string()
            }
            RatioError::Overflow => "The common ratio is too large to represent.".to_string(),
            RatioError::Unknown { message } => {
                format!("An error occurred while computing the ratio: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RatioError::InvalidIndex { .. } => "Pass an index of 2 or more with -n.",
            RatioError::ZeroFirstTerm => "Use a non-zero first term.",
            RatioError::NoRealRoot { .. } => {
                "Check the signs of the terms; with an even n-1 both terms must share a sign."
            }
            RatioError::DivisionByZero | RatioError::Overflow => {
                "Use terms of smaller magnitude or a larger index."
            }
            RatioError::Unknown { .. } => "Make sure both terms are finite numbers.",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Ratio(#[from] RatioError),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Ratio(e) => e.category(),
            AppError::Io(_)
            | AppError::TomlParse(_)
            | AppError::Pattern(_)
            | AppError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            AppError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Ratio(e) => e.user_friendly_message(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Ratio(e) => e.recovery_suggestion(),
            AppError::Io(_) => "Make sure the configuration file exists and is readable.",
            AppError::TomlParse(_) | AppError::Pattern(_) => {
                "Fix the TOML syntax in the configuration file."
            }
            AppError::Serialization(_) => "Retry with --format text.",
            AppError::InvalidConfigValue { .. } => "Correct the value named above.",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
