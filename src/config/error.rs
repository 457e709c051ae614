//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Reciprocity tolerance must be positive, got {0}")]
    InvalidReciprocityTolerance(f64),

    #[error("Sub-criteria scale size must be at least 1")]
    InvalidScaleSize,

    #[error("Sub-criteria count must be at least 1")]
    InvalidSubCriteriaCount,

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
