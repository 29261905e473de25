use reqwest::StatusCode;
use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("summary endpoint returned {0}")]
    Status(StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no quote found for instrument {instrument_id}")]
    InstrumentNotFound { instrument_id: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
