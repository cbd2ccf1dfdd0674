//! External randomizer configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Wheel of Names API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WheelConfig {
    /// API key sent as `x-api-key`
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_max_names")]
    pub max_names: u32,

    #[serde(default = "default_share_mode")]
    pub share_mode: String,
}

impl WheelConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate wheel configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("WHEEL__API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidWheelUrl);
        }
        if production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::WheelUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_names == 0 || self.max_names > 1000 {
            return Err(ValidationError::InvalidMaxNames);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://wheelofnames.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_title() -> String {
    "Clumsy Movie Night".to_string()
}

fn default_description() -> String {
    "First movie to 3 spins wins. Click 'Copy this Wheel' to customize.".to_string()
}

fn default_max_names() -> u32 {
    50
}

fn default_share_mode() -> String {
    "copyable".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> WheelConfig {
        WheelConfig {
            api_key: "key".to_string(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            title: default_title(),
            description: default_description(),
            max_names: default_max_names(),
            share_mode: default_share_mode(),
        }
    }

    #[test]
    fn test_valid_wheel_config() {
        assert!(wheel().validate(true).is_ok());
        assert_eq!(wheel().timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_missing_api_key() {
        let config = WheelConfig {
            api_key: "".to_string(),
            ..wheel()
        };
        assert_eq!(
            config.validate(false),
            Err(ValidationError::MissingRequired("WHEEL__API_KEY"))
        );
    }

    #[test]
    fn test_plain_http_only_outside_production() {
        let config = WheelConfig {
            base_url: "http://localhost:9000".to_string(),
            ..wheel()
        };
        assert!(config.validate(false).is_ok());
        assert_eq!(config.validate(true), Err(ValidationError::WheelUrlMustBeHttps));
    }

    #[test]
    fn test_timeout_bounds() {
        let config = WheelConfig {
            timeout_secs: 0,
            ..wheel()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidTimeout));
    }
}
