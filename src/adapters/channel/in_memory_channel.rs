//! In-Memory Channel Adapter
//!
//! Holds the nomination channel's messages in memory together with the
//! members behind each reaction. Backs the console harness and tests.
//!
//! A reaction whose voters were never recorded fails the voter lookup,
//! which is how a transport that cannot expand a reaction behaves.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{MessageId, Timestamp, VoterId};
use crate::domain::nomination::{MessageOrigin, WindowMessage};
use crate::ports::{ChannelError, ChannelHistory};

/// A message as stored by the channel, with its post time and voters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedMessage {
    #[serde(flatten)]
    pub message: WindowMessage,
    pub posted_at: Timestamp,
    /// Voters per reaction symbol. Missing symbols cannot be expanded.
    #[serde(default)]
    pub voters: BTreeMap<String, Vec<VoterId>>,
}

impl PostedMessage {
    pub fn new(message: WindowMessage, posted_at: Timestamp) -> Self {
        Self {
            message,
            posted_at,
            voters: BTreeMap::new(),
        }
    }

    /// Builder: add a reaction whose voters are known. The count is the
    /// number of voters.
    pub fn with_voters(mut self, symbol: impl Into<String>, voters: &[u64]) -> Self {
        let symbol = symbol.into();
        self.message = self.message.with_reaction(symbol.clone(), voters.len() as u32);
        self.voters
            .insert(symbol, voters.iter().copied().map(VoterId::new).collect());
        self
    }

    /// Builder: set the origin tag.
    pub fn with_origin(mut self, origin: MessageOrigin) -> Self {
        self.message.origin = origin;
        self
    }
}

/// In-memory nomination channel
#[derive(Debug, Clone, Default)]
pub struct InMemoryChannel {
    messages: Arc<RwLock<Vec<PostedMessage>>>,
    unavailable: Arc<RwLock<Option<String>>>,
}

impl InMemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a channel pre-populated with messages
    pub fn with_messages(messages: Vec<PostedMessage>) -> Self {
        Self {
            messages: Arc::new(RwLock::new(messages)),
            unavailable: Arc::new(RwLock::new(None)),
        }
    }

    /// Append a stored message
    pub async fn push(&self, message: PostedMessage) {
        self.messages.write().await.push(message);
    }

    /// Post plain text now with the given origin; returns the new message id
    pub async fn post(&self, content: impl Into<String>, origin: MessageOrigin) -> MessageId {
        let mut messages = self.messages.write().await;
        let next = messages
            .iter()
            .map(|m| m.message.id.as_u64())
            .max()
            .unwrap_or(0)
            + 1;
        let id = MessageId::new(next);
        let message = WindowMessage::nomination(id, content).with_origin(origin);
        messages.push(PostedMessage::new(message, Timestamp::now()));
        id
    }

    /// Make every read fail until cleared
    pub async fn set_unavailable(&self, reason: Option<String>) {
        *self.unavailable.write().await = reason;
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }

    async fn check_available(&self) -> Result<(), ChannelError> {
        match self.unavailable.read().await.as_ref() {
            Some(reason) => Err(ChannelError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChannelHistory for InMemoryChannel {
    async fn fetch_since(&self, since: Timestamp) -> Result<Vec<WindowMessage>, ChannelError> {
        self.check_available().await?;

        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| m.posted_at.is_after(&since))
            .map(|m| m.message.clone())
            .collect())
    }

    async fn reaction_voters(
        &self,
        message_id: MessageId,
        symbol: &str,
    ) -> Result<Vec<VoterId>, ChannelError> {
        self.check_available().await?;

        let messages = self.messages.read().await;
        let posted = messages
            .iter()
            .find(|m| m.message.id == message_id)
            .ok_or(ChannelError::MessageNotFound(message_id))?;

        posted
            .voters
            .get(symbol)
            .cloned()
            .ok_or_else(|| ChannelError::ReactionNotFound {
                message_id,
                symbol: symbol.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_naive_utc(
            chrono::NaiveDate::from_ymd_opt(2023, 10, 28)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
        )
        .plus_secs(secs)
    }

    fn posted(id: u64, title: &str, secs: i64) -> PostedMessage {
        PostedMessage::new(WindowMessage::nomination(MessageId::new(id), title), at(secs))
    }

    #[tokio::test]
    async fn fetch_since_is_strictly_after_boundary() {
        let channel = InMemoryChannel::with_messages(vec![
            posted(1, "Old", -10),
            posted(2, "Edge", 0),
            posted(3, "New", 10),
        ]);

        let window = channel.fetch_since(at(0)).await.unwrap();

        let titles: Vec<_> = window.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(titles, vec!["New"]);
    }

    #[tokio::test]
    async fn voters_are_returned_per_symbol() {
        let channel = InMemoryChannel::with_messages(vec![
            posted(1, "Hausu", 10).with_voters("👍", &[7, 8]),
        ]);

        let voters = channel.reaction_voters(MessageId::new(1), "👍").await.unwrap();

        assert_eq!(voters, vec![VoterId::new(7), VoterId::new(8)]);
    }

    #[tokio::test]
    async fn unrecorded_reaction_fails_lookup() {
        let mut message = posted(1, "Hausu", 10);
        message.message = message.message.with_reaction("🔥", 2);
        let channel = InMemoryChannel::with_messages(vec![message]);

        let result = channel.reaction_voters(MessageId::new(1), "🔥").await;

        assert!(matches!(result, Err(ChannelError::ReactionNotFound { .. })));
    }

    #[tokio::test]
    async fn post_assigns_next_id_and_origin() {
        let channel = InMemoryChannel::with_messages(vec![posted(5, "Hausu", -10)]);

        let id = channel.post("Next Week on the Wheel:", MessageOrigin::Bot).await;

        assert_eq!(id, MessageId::new(6));
        let window = channel.fetch_since(at(0)).await.unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].origin, MessageOrigin::Bot);
    }

    #[tokio::test]
    async fn unavailable_channel_fails_reads() {
        let channel = InMemoryChannel::new();
        channel.set_unavailable(Some("gateway down".into())).await;

        assert!(matches!(
            channel.fetch_since(at(0)).await,
            Err(ChannelError::Unavailable(_))
        ));
    }
}
