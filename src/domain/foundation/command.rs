//! Command infrastructure for channel command handlers.
//!
//! `CommandMetadata` is the context that flows through command processing:
//! which channel the command arrived in, who sent it, and a correlation id
//! that ties together every log line emitted while handling it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ChannelId, VoterId};

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Channel the command was issued in (used for gating).
    pub channel_id: ChannelId,

    /// Member who issued the command, when the transport knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<VoterId>,

    /// Links every log line of one command together.
    correlation_id: String,
}

impl CommandMetadata {
    /// Creates metadata for a command issued in `channel_id`.
    ///
    /// A fresh correlation id is generated.
    pub fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            author: None,
            correlation_id: Uuid::new_v4().to_string(),
        }
    }

    /// Builder: record the issuing member.
    pub fn with_author(mut self, author: VoterId) -> Self {
        self.author = Some(author);
        self
    }

    /// Builder: override the correlation id.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_correlation_id() {
        let a = CommandMetadata::new(ChannelId::new(1));
        let b = CommandMetadata::new(ChannelId::new(1));

        assert!(!a.correlation_id().is_empty());
        assert_ne!(a.correlation_id(), b.correlation_id());
        assert!(a.author.is_none());
    }

    #[test]
    fn builder_chain_sets_fields() {
        let metadata = CommandMetadata::new(ChannelId::new(7))
            .with_author(VoterId::new(99))
            .with_correlation_id("corr-123");

        assert_eq!(metadata.channel_id, ChannelId::new(7));
        assert_eq!(metadata.author, Some(VoterId::new(99)));
        assert_eq!(metadata.correlation_id(), "corr-123");
    }
}
