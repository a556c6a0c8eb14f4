//! Core traits for demo configuration types.

use crate::Result;

/// Configuration trait for validated value types.
///
/// Every configuration entering the reporter pipeline is validated up front;
/// rendering never starts on a configuration that failed validation.
pub trait Validate: Clone + Send + Sync {
    /// Validate the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn validate(&self) -> Result<()>;
}
