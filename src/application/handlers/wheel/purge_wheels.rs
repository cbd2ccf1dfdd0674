//! PurgeWheelsHandler - deletes every shared wheel on the account.

use std::sync::Arc;

use crate::domain::foundation::CommandMetadata;
use crate::ports::{WheelService, WheelServiceError};

#[derive(Debug, Clone, Default)]
pub struct PurgeWheelsCommand;

/// Outcome for one shared wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeOutcome {
    pub path: String,
    pub deleted: bool,
}

pub struct PurgeWheelsHandler {
    wheel: Arc<dyn WheelService>,
}

impl PurgeWheelsHandler {
    pub fn new(wheel: Arc<dyn WheelService>) -> Self {
        Self { wheel }
    }

    /// Fails only if the listing fails; individual deletes are reported.
    pub async fn handle(
        &self,
        _cmd: PurgeWheelsCommand,
        metadata: CommandMetadata,
    ) -> Result<Vec<PurgeOutcome>, WheelServiceError> {
        let shared = self.wheel.list_shared().await?;
        let mut outcomes = Vec::with_capacity(shared.len());

        for wheel in shared {
            let deleted = match self.wheel.delete(&wheel.path).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(path = %wheel.path, error = %e, "Failed to delete shared wheel");
                    false
                }
            };
            outcomes.push(PurgeOutcome {
                path: wheel.path,
                deleted,
            });
        }

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            wheels = outcomes.len(),
            "Purged shared wheels"
        );
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::wheel::MockWheelService;
    use crate::domain::foundation::ChannelId;

    #[tokio::test]
    async fn reports_each_wheel() {
        let wheel = MockWheelService::new()
            .with_shared(&["one", "two"])
            .with_failing_delete("two");
        let handler = PurgeWheelsHandler::new(Arc::new(wheel.clone()));

        let outcomes = handler
            .handle(PurgeWheelsCommand, CommandMetadata::new(ChannelId::new(1)))
            .await
            .unwrap();

        assert_eq!(
            outcomes,
            vec![
                PurgeOutcome { path: "one".into(), deleted: true },
                PurgeOutcome { path: "two".into(), deleted: false },
            ]
        );
        assert_eq!(wheel.deleted(), vec!["one".to_string()]);
    }
}
