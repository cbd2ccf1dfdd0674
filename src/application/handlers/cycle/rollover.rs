//! RolloverHandler - closes the current cycle.
//!
//! Nominations with more than one distinct voter are carried to the next
//! wheel; the rest are merged into the fallen registry. The boundary then
//! moves to the instant the rollover started, so anything posted while it
//! ran belongs to the next cycle.

use std::sync::Arc;

use thiserror::Error;

use crate::application::ledger::{Ledger, LedgerError};
use crate::application::window::WindowReader;
use crate::domain::cycle::RolloverPlan;
use crate::domain::foundation::{CommandMetadata, DomainError, Timestamp};
use crate::ports::ChannelError;

/// Command to close the current cycle.
#[derive(Debug, Clone, Default)]
pub struct RolloverCommand;

/// Result of a completed rollover.
#[derive(Debug, Clone)]
pub struct RolloverResult {
    /// Titles for the next wheel, ascending.
    pub promoted: Vec<String>,
    /// Titles retired this cycle, ascending.
    pub demoted: Vec<String>,
    /// How many demoted titles were not already fallen.
    pub newly_fallen: usize,
    /// Start of the next cycle.
    pub next_boundary: Timestamp,
}

#[derive(Debug, Error)]
pub enum RolloverError {
    #[error("Could not read the nomination channel: {0}")]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<RolloverError> for DomainError {
    fn from(err: RolloverError) -> Self {
        match err {
            RolloverError::Channel(e) => e.into(),
            RolloverError::Ledger(e) => e.into(),
        }
    }
}

/// Handler for closing cycles.
pub struct RolloverHandler {
    ledger: Arc<Ledger>,
    window: WindowReader,
}

impl RolloverHandler {
    pub fn new(ledger: Arc<Ledger>, window: WindowReader) -> Self {
        Self { ledger, window }
    }

    pub async fn handle(
        &self,
        _cmd: RolloverCommand,
        metadata: CommandMetadata,
    ) -> Result<RolloverResult, RolloverError> {
        let mut ledger = self.ledger.lock().await;
        let rollover_time = Timestamp::now();

        let boundary = ledger.state().boundary();
        let nominations = self
            .window
            .nominations(boundary, ledger.state().exclusions())
            .await?;
        let assessments = self.window.assess(&nominations).await;
        let plan = RolloverPlan::from_assessments(assessments);

        // Fallen first: a crash before the boundary write re-runs idempotently.
        let newly_fallen = ledger.merge_fallen(plan.demoted.iter().cloned()).await?;
        ledger.advance_boundary(rollover_time).await?;

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            promoted = plan.promoted.len(),
            demoted = plan.demoted.len(),
            newly_fallen,
            next_boundary = %rollover_time,
            "Rollover complete"
        );

        Ok(RolloverResult {
            promoted: plan.promoted,
            demoted: plan.demoted,
            newly_fallen,
            next_boundary: rollover_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::channel::{InMemoryChannel, PostedMessage};
    use crate::application::ledger::test_support::MemoryStores;
    use crate::domain::foundation::{ChannelId, MessageId};
    use crate::domain::nomination::{MessageOrigin, WindowMessage};

    fn posted(id: u64, title: &str) -> PostedMessage {
        PostedMessage::new(
            WindowMessage::nomination(MessageId::new(id), title),
            Timestamp::now().plus_secs(-1),
        )
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(ChannelId::new(1))
    }

    async fn setup(
        fallen: &[&str],
        messages: Vec<PostedMessage>,
    ) -> (MemoryStores, Arc<Ledger>, InMemoryChannel, RolloverHandler) {
        let memory = MemoryStores::new(fallen, Timestamp::now().minus_days(7));
        let ledger = Arc::new(memory.ledger().await);
        let channel = InMemoryChannel::with_messages(messages);
        let handler = RolloverHandler::new(
            ledger.clone(),
            WindowReader::new(Arc::new(channel.clone())),
        );
        (memory, ledger, channel, handler)
    }

    #[tokio::test]
    async fn promotes_multi_voter_and_retires_single_voter() {
        let (memory, _ledger, _channel, handler) = setup(
            &[],
            vec![
                posted(1, "Hausu").with_voters("👍", &[1, 2]),
                posted(2, "Hackers").with_voters("👍", &[3]),
            ],
        )
        .await;

        let result = handler.handle(RolloverCommand, metadata()).await.unwrap();

        assert_eq!(result.promoted, vec!["Hausu".to_string()]);
        assert_eq!(result.demoted, vec!["Hackers".to_string()]);
        assert_eq!(memory.fallen.rows().await, Some(vec!["Hackers".to_string()]));
    }

    #[tokio::test]
    async fn zero_reaction_nominations_fall() {
        let (_memory, ledger, _channel, handler) =
            setup(&["Akira"], vec![posted(1, "Zardoz")]).await;

        handler.handle(RolloverCommand, metadata()).await.unwrap();

        let state = ledger.snapshot().await;
        assert_eq!(state.fallen().to_rows(), vec!["Akira", "Zardoz"]);
    }

    #[tokio::test]
    async fn excluded_and_bot_messages_are_untouched() {
        let (_memory, ledger, _channel, handler) = setup(
            &[],
            vec![
                posted(1, "Hausu"),
                posted(2, "Next Week on the Wheel:").with_origin(MessageOrigin::Bot),
                posted(3, ".rollover").with_origin(MessageOrigin::Command),
            ],
        )
        .await;
        ledger.lock().await.exclude("Hausu");

        let result = handler.handle(RolloverCommand, metadata()).await.unwrap();

        assert!(result.promoted.is_empty());
        assert!(result.demoted.is_empty());
        assert!(ledger.snapshot().await.fallen().is_empty());
    }

    #[tokio::test]
    async fn advances_boundary_past_window() {
        let (_memory, ledger, channel, handler) =
            setup(&[], vec![posted(1, "Hausu").with_voters("👍", &[1, 2])]).await;

        let result = handler.handle(RolloverCommand, metadata()).await.unwrap();
        assert_eq!(ledger.snapshot().await.boundary().start, result.next_boundary);

        channel.post("Hackers", MessageOrigin::Member).await;
        let second = handler.handle(RolloverCommand, metadata()).await.unwrap();

        assert!(second.promoted.is_empty());
        assert_eq!(second.demoted, vec!["Hackers".to_string()]);
    }

    #[tokio::test]
    async fn channel_failure_changes_nothing() {
        let (memory, ledger, channel, handler) = setup(&["Akira"], vec![]).await;
        let before = ledger.snapshot().await.boundary();
        channel.set_unavailable(Some("gateway down".into())).await;

        let result = handler.handle(RolloverCommand, metadata()).await;

        assert!(matches!(result, Err(RolloverError::Channel(_))));
        assert_eq!(ledger.snapshot().await.boundary(), before);
        assert_eq!(memory.fallen.write_count(), 0);
        assert_eq!(memory.boundary.write_count(), 0);
    }
}
