//! Error types for Physarum operations.
//!
//! The optimizer core itself never errors — malformed input degrades to a
//! skipped element or an empty result. Errors exist at the edges:
//! configuration validation and (de)serialization in embedding processes.

use std::error::Error;
use std::fmt;

/// Result type for Physarum operations.
pub type Result<T> = std::result::Result<T, PhysarumError>;

/// Errors that can occur around the router core.
#[derive(Debug, Clone)]
pub enum PhysarumError {
    /// Configuration errors.
    Config(ConfigError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for PhysarumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysarumError::Config(e) => write!(f, "Config error: {}", e),
            PhysarumError::Io(msg) => write!(f, "I/O error: {}", msg),
            PhysarumError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for PhysarumError {}

impl From<std::io::Error> for PhysarumError {
    fn from(e: std::io::Error) -> Self {
        PhysarumError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PhysarumError {
    fn from(e: serde_json::Error) -> Self {
        PhysarumError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Value outside its permitted range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// Value must be strictly positive.
    NotPositive { field: String, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
        }
    }
}

impl PhysarumError {
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        PhysarumError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn not_positive(field: impl Into<String>, value: f64) -> Self {
        PhysarumError::Config(ConfigError::NotPositive {
            field: field.into(),
            value,
        })
    }
}
