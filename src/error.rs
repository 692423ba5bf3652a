use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaError {
    #[error("Expected {expected} input values, got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("Invalid value for {feature}: {reason}")]
    InvalidValue { feature: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Numeric error: {0}")]
    Numeric(String),

    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GaError>;
