//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! config file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `SITE_RANKER` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use site_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ranking sites from {}", config.data.sites_path.display());
//! ```

mod criteria;
mod data;
mod error;
mod logging;
mod ranking;
mod storage;

pub use criteria::CriteriaConfig;
pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ranking::RankingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;
use std::path::Path;

/// Base name of the config file looked up in the working directory
/// (`site_ranker.toml`, `site_ranker.yaml`, ...)
pub const DEFAULT_CONFIG_NAME: &str = "site_ranker";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration for the reference data set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ordered ranking criteria
    #[serde(default)]
    pub criteria: CriteriaConfig,

    /// Ranking output (top N, rounding, consistency threshold)
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Candidate site data
    #[serde(default)]
    pub data: DataConfig,

    /// Submission persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default file (if present) and environment
    ///
    /// See [`AppConfig::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a config file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `path` when given, otherwise `site_ranker.*` if it exists
    /// 3. Overlays environment variables with `SITE_RANKER` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SITE_RANKER__RANKING__TOP_N=100` -> `ranking.top_n = 100`
    /// - `SITE_RANKER__DATA__SITES_PATH=...` -> `data.sites_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - An explicitly given file is missing or unreadable
    /// - Values cannot be parsed into expected types
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::default()
                    .prefix("SITE_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.criteria.validate()?;
        self.ranking.validate()?;
        self.data.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
