//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RANK_EXPLORER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use rank_explorer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Showing the top {} alternatives", config.session.top_n);
//! ```

mod data;
mod engine;
mod error;
mod logging;
mod session;
mod weights;

pub use data::DataConfig;
pub use engine::{default_worker_threads, EngineConfig};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use session::SessionConfig;
pub use weights::WeightsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Session configuration (row limits, top-N, tie policy)
    #[serde(default)]
    pub session: SessionConfig,

    /// Weight control bounds
    #[serde(default)]
    pub weights: WeightsConfig,

    /// Scoring engine configuration (worker pool)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Dataset location
    #[serde(default)]
    pub data: DataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RANK_EXPLORER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RANK_EXPLORER__SESSION__TOP_N=5` -> `session.top_n = 5`
    /// - `RANK_EXPLORER__DATA__DATASET_PATH=...` -> `data.dataset_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RANK_EXPLORER")
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
        self.session.validate()?;
        self.weights.validate()?;
        self.engine.validate()?;
        self.data.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
