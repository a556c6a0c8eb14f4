//! Error types for lora-primer.

use thiserror::Error;

/// Result type alias for lora-primer operations.
pub type Result<T> = std::result::Result<T, PrimerError>;

/// Errors that can occur in lora-primer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PrimerError {
    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// File read/write or serialization error.
    #[error("io error: {0}")]
    Io(String),
}
