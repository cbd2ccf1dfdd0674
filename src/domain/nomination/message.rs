//! Messages read from the nomination channel window.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MessageId;

/// Who produced a message in the nomination channel.
///
/// The transport adapter tags every message; only member posts are
/// nominations. Bot output (such as the "Next Week on the Wheel:" header)
/// and command invocations never enter the tally or the rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    #[default]
    Member,
    Bot,
    Command,
}

/// One reaction emoji on a message and how many members used it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub symbol: String,
    pub count: u32,
}

impl Reaction {
    pub fn new(symbol: impl Into<String>, count: u32) -> Self {
        Self {
            symbol: symbol.into(),
            count,
        }
    }
}

/// A message visible in the current window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMessage {
    pub id: MessageId,
    pub content: String,
    #[serde(default)]
    pub origin: MessageOrigin,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl WindowMessage {
    /// Creates a member-authored message with no reactions.
    pub fn nomination(id: MessageId, title: impl Into<String>) -> Self {
        Self {
            id,
            content: title.into(),
            origin: MessageOrigin::Member,
            reactions: Vec::new(),
        }
    }

    /// Builder: attach a reaction.
    pub fn with_reaction(mut self, symbol: impl Into<String>, count: u32) -> Self {
        self.reactions.push(Reaction::new(symbol, count));
        self
    }

    /// Builder: set the origin tag.
    pub fn with_origin(mut self, origin: MessageOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Whether this message is a member nomination.
    pub fn is_nomination(&self) -> bool {
        self.origin == MessageOrigin::Member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactions_keep_posting_order() {
        let msg = WindowMessage::nomination(MessageId::new(1), "Earth Girls are Easy")
            .with_reaction("👍", 1)
            .with_reaction("😀", 2);
        let symbols: Vec<&str> = msg.reactions.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, ["👍", "😀"]);
    }

    #[test]
    fn origin_defaults_to_member_when_absent() {
        let msg: WindowMessage =
            serde_json::from_str(r#"{"id": 5, "content": "Hackers"}"#).unwrap();
        assert!(msg.is_nomination());
        assert!(msg.reactions.is_empty());
    }

    #[test]
    fn bot_and_command_messages_are_not_nominations() {
        let bot = WindowMessage::nomination(MessageId::new(1), "Next Week on the Wheel:")
            .with_origin(MessageOrigin::Bot);
        let cmd = WindowMessage::nomination(MessageId::new(2), ".rollover")
            .with_origin(MessageOrigin::Command);
        assert!(!bot.is_nomination());
        assert!(!cmd.is_nomination());
    }
}
