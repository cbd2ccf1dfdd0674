//! Wheel Service Port - Interface for the external spin-the-wheel service.
//!
//! Submissions are not idempotent: submitting twice creates two shared
//! wheels. Old wheels are cleaned up with `list_shared` + `delete`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A wheel stored by the service and reachable through its share path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedWheel {
    pub path: String,
}

/// Errors from the wheel service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WheelServiceError {
    #[error("Wheel service returned status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

impl WheelServiceError {
    /// HTTP status when the service answered; `None` for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WheelServiceError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<WheelServiceError> for DomainError {
    fn from(err: WheelServiceError) -> Self {
        let mut domain = DomainError::new(ErrorCode::WheelServiceError, err.to_string());
        if let Some(code) = err.status_code() {
            domain = domain.with_detail("status", code.to_string());
        }
        domain
    }
}

/// Port for the external randomizer.
#[async_trait]
pub trait WheelService: Send + Sync {
    /// Create a shared wheel holding `entries` (duplicates allowed).
    async fn submit(&self, entries: &[String]) -> Result<SharedWheel, WheelServiceError>;

    /// Every shared wheel owned by the configured credential.
    async fn list_shared(&self) -> Result<Vec<SharedWheel>, WheelServiceError>;

    /// Delete one shared wheel.
    async fn delete(&self, path: &str) -> Result<(), WheelServiceError>;

    /// Public URL for a shared wheel.
    fn share_url(&self, wheel: &SharedWheel) -> String;
}
