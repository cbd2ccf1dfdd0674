//! RecordHoldoverHandler - captures the window for a later wheel.
//!
//! Stores every non-excluded nomination that received a vote, sorted by
//! title, and advances the boundary. No classification happens and the
//! fallen registry is left alone.

use std::sync::Arc;

use thiserror::Error;

use crate::application::ledger::{Ledger, LedgerError};
use crate::application::window::WindowReader;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::domain::nomination::tally;
use crate::domain::registry::HoldoverList;
use crate::ports::ChannelError;

/// Command to record a holdover list.
#[derive(Debug, Clone, Default)]
pub struct RecordHoldoverCommand;

/// Result of recording a holdover list.
#[derive(Debug, Clone)]
pub struct RecordHoldoverResult {
    pub holdover: HoldoverList,
    pub next_boundary: Timestamp,
}

#[derive(Debug, Error)]
pub enum RecordHoldoverError {
    #[error("Could not read the nomination channel: {0}")]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<RecordHoldoverError> for DomainError {
    fn from(err: RecordHoldoverError) -> Self {
        match err {
            RecordHoldoverError::Channel(e) => e.into(),
            RecordHoldoverError::Ledger(e) => e.into(),
        }
    }
}

pub struct RecordHoldoverHandler {
    ledger: Arc<Ledger>,
    window: WindowReader,
}

impl RecordHoldoverHandler {
    pub fn new(ledger: Arc<Ledger>, window: WindowReader) -> Self {
        Self { ledger, window }
    }

    pub async fn handle(
        &self,
        _cmd: RecordHoldoverCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordHoldoverResult, RecordHoldoverError> {
        let mut ledger = self.ledger.lock().await;
        let recorded_at = Timestamp::now();

        let nominations = self
            .window
            .nominations(ledger.state().boundary(), ledger.state().exclusions())
            .await?;
        let holdover = HoldoverList::from_tallies(&tally(&nominations));

        ledger.replace_holdover(holdover.clone()).await?;
        ledger.advance_boundary(recorded_at).await?;

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            titles = holdover.len(),
            "Holdover list recorded"
        );

        Ok(RecordHoldoverResult {
            holdover,
            next_boundary: recorded_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::channel::{InMemoryChannel, PostedMessage};
    use crate::application::ledger::test_support::MemoryStores;
    use crate::domain::foundation::{ChannelId, MessageId};
    use crate::domain::nomination::WindowMessage;

    fn posted(id: u64, title: &str) -> PostedMessage {
        PostedMessage::new(
            WindowMessage::nomination(MessageId::new(id), title),
            Timestamp::now().plus_secs(-1),
        )
    }

    #[tokio::test]
    async fn stores_voted_titles_sorted_and_leaves_fallen_alone() {
        let memory = MemoryStores::new(&["Akira"], Timestamp::now().minus_days(7));
        let ledger = Arc::new(memory.ledger().await);
        let channel = InMemoryChannel::with_messages(vec![
            posted(1, "Zardoz").with_voters("👍", &[1]),
            posted(2, "Hausu").with_voters("👍", &[1, 2]),
            posted(3, "Unvoted"),
        ]);
        let handler = RecordHoldoverHandler::new(ledger.clone(), WindowReader::new(Arc::new(channel)));

        let result = handler
            .handle(RecordHoldoverCommand, CommandMetadata::new(ChannelId::new(1)))
            .await
            .unwrap();

        assert_eq!(result.holdover.to_rows(), vec!["Hausu", "Zardoz"]);
        assert_eq!(
            memory.holdover.rows().await,
            Some(vec!["Hausu".to_string(), "Zardoz".to_string()])
        );
        assert_eq!(memory.fallen.write_count(), 0);
        assert_eq!(ledger.snapshot().await.boundary().start, result.next_boundary);
    }
}
