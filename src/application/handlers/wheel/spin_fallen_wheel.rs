//! SpinFallenWheelHandler - sends the fallen registry to the randomizer.

use std::sync::Arc;

use crate::application::ledger::Ledger;
use crate::domain::foundation::CommandMetadata;
use crate::domain::wheel::WheelList;
use crate::ports::{WheelService, WheelServiceError};

#[derive(Debug, Clone, Default)]
pub struct SpinFallenWheelCommand;

pub struct SpinFallenWheelHandler {
    ledger: Arc<Ledger>,
    wheel: Arc<dyn WheelService>,
}

impl SpinFallenWheelHandler {
    pub fn new(ledger: Arc<Ledger>, wheel: Arc<dyn WheelService>) -> Self {
        Self { ledger, wheel }
    }

    /// Returns the share URL.
    pub async fn handle(
        &self,
        _cmd: SpinFallenWheelCommand,
        metadata: CommandMetadata,
    ) -> Result<String, WheelServiceError> {
        let state = self.ledger.snapshot().await;
        let list = WheelList::unweighted(state.fallen().iter());

        let shared = self.wheel.submit(list.entries()).await?;
        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            entries = list.len(),
            path = %shared.path,
            "Fallen wheel submitted"
        );
        Ok(self.wheel.share_url(&shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::wheel::MockWheelService;
    use crate::application::ledger::test_support::MemoryStores;
    use crate::domain::foundation::{ChannelId, Timestamp};

    #[tokio::test]
    async fn submits_one_entry_per_fallen_title() {
        let memory = MemoryStores::new(&["Zardoz", "Akira"], Timestamp::now());
        let wheel = MockWheelService::new().with_path("fallen");
        let handler = SpinFallenWheelHandler::new(Arc::new(memory.ledger().await), Arc::new(wheel.clone()));

        let url = handler
            .handle(SpinFallenWheelCommand, CommandMetadata::new(ChannelId::new(1)))
            .await
            .unwrap();

        assert_eq!(url, "https://wheelofnames.com/fallen");
        assert_eq!(wheel.submissions()[0], vec!["Akira", "Zardoz"]);
    }

    #[tokio::test]
    async fn failure_carries_status() {
        let memory = MemoryStores::new(&["Akira"], Timestamp::now());
        let handler = SpinFallenWheelHandler::new(
            Arc::new(memory.ledger().await),
            Arc::new(MockWheelService::new().with_failure(503)),
        );

        let err = handler
            .handle(SpinFallenWheelCommand, CommandMetadata::new(ChannelId::new(1)))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(503));
    }
}
