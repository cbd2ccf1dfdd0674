//! Channel History Port - Interface for reading the nomination channel.
//!
//! The chat transport supplies the window of messages posted since a cycle
//! boundary, and on request expands one reaction into the members who
//! placed it. Expansion is a separate, possibly failing call: the tally
//! never needs it, only the rollover does.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, MessageId, Timestamp, VoterId};
use crate::domain::nomination::WindowMessage;

/// Errors from the chat transport.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel unavailable: {0}")]
    Unavailable(String),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("Reaction {symbol} not found on message {message_id}")]
    ReactionNotFound { message_id: MessageId, symbol: String },
}

impl From<ChannelError> for DomainError {
    fn from(err: ChannelError) -> Self {
        DomainError::new(ErrorCode::ChannelUnavailable, err.to_string())
    }
}

/// Port for reading nominations and reactions from the channel.
#[async_trait]
pub trait ChannelHistory: Send + Sync {
    /// Every message posted strictly after `since`.
    ///
    /// No ordering is guaranteed.
    async fn fetch_since(&self, since: Timestamp) -> Result<Vec<WindowMessage>, ChannelError>;

    /// The members who reacted to `message_id` with `symbol`.
    async fn reaction_voters(
        &self,
        message_id: MessageId,
        symbol: &str,
    ) -> Result<Vec<VoterId>, ChannelError>;
}
