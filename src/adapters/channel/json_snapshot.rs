//! JSON channel snapshots.
//!
//! A snapshot is an exported slice of the nomination channel:
//!
//! ```json
//! {
//!   "messages": [
//!     {
//!       "id": 1,
//!       "content": "Hausu",
//!       "posted_at": "2023-10-28T20:15:00",
//!       "reactions": [{ "symbol": "👍", "count": 3 }],
//!       "voters": { "👍": [101, 102] }
//!     }
//!   ]
//! }
//! ```
//!
//! `origin` defaults to `member`; `voters` may be omitted per reaction, in
//! which case that reaction cannot be expanded.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::{InMemoryChannel, PostedMessage};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Malformed snapshot {path}: {reason}")]
    Malformed { path: String, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    #[serde(default)]
    pub messages: Vec<PostedMessage>,
}

impl ChannelSnapshot {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_channel(self) -> InMemoryChannel {
        InMemoryChannel::with_messages(self.messages)
    }
}

/// Read a snapshot file into an in-memory channel.
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<InMemoryChannel, SnapshotError> {
    let path = path.as_ref();
    let path_display = path.display().to_string();

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SnapshotError::Io {
            path: path_display.clone(),
            reason: e.to_string(),
        })?;

    let snapshot = ChannelSnapshot::from_json(&json).map_err(|e| SnapshotError::Malformed {
        path: path_display.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(path = %path_display, messages = snapshot.messages.len(), "Loaded channel snapshot");
    Ok(snapshot.into_channel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MessageId, Timestamp, VoterId};
    use crate::domain::nomination::MessageOrigin;
    use crate::ports::ChannelHistory;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "messages": [
            {
                "id": 1,
                "content": "Hausu",
                "posted_at": "2023-10-28T20:15:00",
                "reactions": [{ "symbol": "👍", "count": 3 }],
                "voters": { "👍": [101, 102] }
            },
            {
                "id": 2,
                "content": "Next Week on the Wheel:",
                "origin": "bot",
                "posted_at": "2023-10-28T20:16:00"
            }
        ]
    }"#;

    #[test]
    fn parses_messages_with_defaults() {
        let snapshot = ChannelSnapshot::from_json(SNAPSHOT).unwrap();

        assert_eq!(snapshot.messages.len(), 2);
        assert_eq!(snapshot.messages[0].message.origin, MessageOrigin::Member);
        let votes: u32 = snapshot.messages[0].message.reactions.iter().map(|r| r.count).sum();
        assert_eq!(votes, 3);
        assert_eq!(snapshot.messages[1].message.origin, MessageOrigin::Bot);
        assert!(snapshot.messages[1].voters.is_empty());
    }

    #[tokio::test]
    async fn load_snapshot_builds_channel() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("channel.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let channel = load_snapshot(&path).await.unwrap();

        let since = Timestamp::now().minus_days(365 * 100);
        assert_eq!(channel.fetch_since(since).await.unwrap().len(), 2);
        assert_eq!(
            channel.reaction_voters(MessageId::new(1), "👍").await.unwrap(),
            vec![VoterId::new(101), VoterId::new(102)]
        );
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_snapshot(temp_dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(ChannelSnapshot::from_json("{\"messages\": [{\"id\": \"x\"}]}").is_err());
    }
}
