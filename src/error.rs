//! Domain error types for numpick
//!
//! The picker itself never fails: out-of-range values are reported through
//! the limit-exceeded listener. These errors cover the layers around it:
//! - configuration loading and CLI parsing
//! - log file setup and clipboard access

use thiserror::Error;

/// Top-level error type for numpick
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

impl From<arboard::Error> for PickerError {
    fn from(err: arboard::Error) -> Self {
        PickerError::Clipboard(err.to_string())
    }
}
