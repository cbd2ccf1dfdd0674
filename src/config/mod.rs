//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOVIE_NIGHT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use movie_night::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data lives in {}", config.storage.data_dir.display());
//! ```

mod bot;
mod channels;
mod error;
mod storage;
mod wheel;

pub use bot::{BotConfig, Environment};
pub use channels::ChannelsConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;
pub use wheel::WheelConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Command surface and runtime settings
    #[serde(default)]
    pub bot: BotConfig,

    /// Nomination and operator channels
    pub channels: ChannelsConfig,

    /// Registry file locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// External randomizer (Wheel of Names)
    pub wheel: WheelConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOVIE_NIGHT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MOVIE_NIGHT__CHANNELS__NOMINATION=1234` -> `channels.nomination = 1234`
    /// - `MOVIE_NIGHT__WHEEL__API_KEY=...` -> `wheel.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOVIE_NIGHT")
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
        self.bot.validate()?;
        self.channels.validate()?;
        self.storage.validate()?;
        self.wheel.validate(self.bot.is_production())?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.bot.is_production()
    }
}
