//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a chat message in the nomination channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a channel member who reacted to a nomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(u64);

impl VoterId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a chat channel, used for command gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(u64);

impl ChannelId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External movie catalog identifier (the numeric part of an IMDb `tt` id).
///
/// Kept as a string so leading zeros survive (`0133093`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a MovieId, rejecting empty or non-numeric input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim().trim_start_matches("tt");
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("movie_id"));
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "movie_id",
                "expected digits, optionally prefixed with 'tt'",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_keeps_leading_zeros() {
        let id = MovieId::new("0133093").unwrap();
        assert_eq!(id.as_str(), "0133093");
    }

    #[test]
    fn movie_id_strips_tt_prefix() {
        let id: MovieId = "tt0113243".parse().unwrap();
        assert_eq!(id.to_string(), "0113243");
    }

    #[test]
    fn movie_id_rejects_empty() {
        assert!(matches!(
            MovieId::new("  "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn movie_id_rejects_letters() {
        assert!(matches!(
            MovieId::new("abc123"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn message_id_serializes_transparently() {
        let json = serde_json::to_string(&MessageId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
