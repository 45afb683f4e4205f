//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("max_alternatives must be at least 1")]
    InvalidMaxAlternatives,

    #[error("Invalid weight bounds: {0}")]
    InvalidWeightBounds(String),

    #[error("worker_threads must be between 1 and {max}, got {actual}")]
    InvalidWorkerThreads { max: usize, actual: usize },
}
