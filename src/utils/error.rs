//! Error types for the cost estimator.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Errors raised while loading or validating the property file.
///
/// All of these are fatal at startup; nothing retries.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConfigError {
    /// The property file could not be opened or read
    #[error("Cannot read config file {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// A required key is absent
    #[error("Missing required config key: {0}")]
    MissingKey(String),

    /// A value did not parse as an integer
    #[error("Invalid integer for key '{key}': '{value}'")]
    InvalidValue { key: String, value: String },

    /// Values parsed but violate a configuration constraint
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised by the pricing engine.
///
/// These indicate a broken upstream invariant rather than bad user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostError {
    /// Batch size must be strictly positive to divide message volume
    #[error("Batch size must be positive, got {0}")]
    InvalidBatchSize(i64),
}

/// Main error type for the estimator.
///
/// Library errors are converted to this type before reaching the binary
/// or the HTTP layer.
#[derive(Error, Debug, Serialize)]
pub enum EstimatorError {
    /// Configuration loading or validation failed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing arithmetic received out-of-domain input
    #[error("Cost error: {0}")]
    Cost(#[from] CostError),

    /// Report server failure
    #[error("Server error: {0}")]
    Server(String),
}

/// Convenience result type for estimator operations.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

// Helper methods for config error creation
impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

// Convert std::io::Error to EstimatorError (only the listener can produce these)
impl From<io::Error> for EstimatorError {
    fn from(err: io::Error) -> Self {
        Self::Server(err.to_string())
    }
}
