//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No rated power for appliance: {0}")]
    UnresolvedPower(String),

    #[error("Calculation {0} not found in history")]
    NotFound(i64),

    #[error("Invalid usage hours: {0}")]
    InvalidHours(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
