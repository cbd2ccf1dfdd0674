//! RemoveFallenHandler - removes one title from the fallen registry.

use std::sync::Arc;

use crate::application::ledger::{Ledger, LedgerError};
use crate::domain::foundation::CommandMetadata;

/// Command to remove the title at a 1-based index of the sorted listing.
#[derive(Debug, Clone)]
pub struct RemoveFallenCommand {
    pub display_index: usize,
}

pub struct RemoveFallenHandler {
    ledger: Arc<Ledger>,
}

impl RemoveFallenHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    /// Returns the removed title.
    pub async fn handle(
        &self,
        cmd: RemoveFallenCommand,
        metadata: CommandMetadata,
    ) -> Result<String, LedgerError> {
        let removed = self.ledger.lock().await.remove_fallen(cmd.display_index).await?;
        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            title = %removed,
            "Removed from the fallen"
        );
        Ok(removed)
    }
}
