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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Command prefix must not be empty or contain whitespace")]
    InvalidCommandPrefix,

    #[error("Maximum message length must be between 100 and 4000")]
    InvalidMessageLength,

    #[error("Random b-movie attempts must be between 1 and 100")]
    InvalidRandomAttempts,

    #[error("Channel ids must be non-zero")]
    InvalidChannelId,

    #[error("Storage file names must be non-empty and distinct")]
    InvalidStorageFiles,

    #[error("Invalid wheel service URL")]
    InvalidWheelUrl,

    #[error("Wheel service URL must use HTTPS in production")]
    WheelUrlMustBeHttps,

    #[error("Invalid wheel request timeout")]
    InvalidTimeout,

    #[error("Wheel max names must be between 1 and 1000")]
    InvalidMaxNames,
}
