//! Bot behavior configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Command surface and runtime settings
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Leading text that marks a message as a command
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Largest outgoing message, in characters
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Candidates drawn before the random b-movie command gives up
    #[serde(default = "default_random_attempts")]
    pub random_attempts: u32,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl BotConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate bot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.command_prefix.is_empty() || self.command_prefix.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidCommandPrefix);
        }
        if !(100..=4000).contains(&self.max_message_len) {
            return Err(ValidationError::InvalidMessageLength);
        }
        if self.random_attempts == 0 || self.random_attempts > 100 {
            return Err(ValidationError::InvalidRandomAttempts);
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            max_message_len: default_max_message_len(),
            environment: default_environment(),
            log_level: default_log_level(),
            random_attempts: default_random_attempts(),
        }
    }
}

fn default_command_prefix() -> String {
    ".".to_string()
}

fn default_max_message_len() -> usize {
    2000
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,movie_night=debug".to_string()
}

fn default_random_attempts() -> u32 {
    25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_config_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.command_prefix, ".");
        assert_eq!(config.max_message_len, 2000);
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let mut config = BotConfig::default();
        assert!(!config.is_production());

        config.environment = Environment::Production;
        assert!(config.is_production());
    }

    #[test]
    fn test_validation_rejects_blank_prefix() {
        let config = BotConfig {
            command_prefix: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCommandPrefix));
    }

    #[test]
    fn test_validation_message_length_bounds() {
        let config = BotConfig {
            max_message_len: 10,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMessageLength));
    }

    #[test]
    fn test_validation_random_attempts() {
        let config = BotConfig {
            random_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRandomAttempts));
    }
}
