//! Configuration validation

use std::time::Duration;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid buffer size: {0}")]
    InvalidBufferSize(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidTimeout` - if a configured timeout is zero
    /// - `InvalidBufferSize` - if a size or limit is zero
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate timeout duration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if the duration is zero.
    pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot be zero"
            )));
        }
        Ok(())
    }

    /// Validate a size or limit that must be positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidBufferSize` if the value is zero.
    pub fn validate_nonzero(value: usize, name: &str) -> ConfigResult<()> {
        if value == 0 {
            return Err(ConfigurationError::InvalidBufferSize(format!(
                "{name} cannot be zero"
            )));
        }
        Ok(())
    }
}
