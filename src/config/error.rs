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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("At least one criterion must be configured")]
    NoCriteria,

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Ranking top_n must be greater than zero")]
    InvalidTopN,

    #[error("Weight decimals exceed maximum allowed (10)")]
    WeightDecimalsTooLarge,

    #[error("Consistency threshold must be a positive number")]
    InvalidConsistencyThreshold,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
