//! ReplayHoldoverHandler - announces the stored holdover list.
//!
//! The live window is not read. The boundary advances so votes cast before
//! the holdover period do not leak into the next tally.

use std::sync::Arc;

use crate::application::ledger::{Ledger, LedgerError};
use crate::domain::foundation::{CommandMetadata, Timestamp};
use crate::domain::registry::HoldoverList;

/// Command to replay the holdover list.
#[derive(Debug, Clone, Default)]
pub struct ReplayHoldoverCommand;

#[derive(Debug, Clone)]
pub struct ReplayHoldoverResult {
    pub holdover: HoldoverList,
    pub next_boundary: Timestamp,
}

pub struct ReplayHoldoverHandler {
    ledger: Arc<Ledger>,
}

impl ReplayHoldoverHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        _cmd: ReplayHoldoverCommand,
        metadata: CommandMetadata,
    ) -> Result<ReplayHoldoverResult, LedgerError> {
        let mut ledger = self.ledger.lock().await;
        let replayed_at = Timestamp::now();

        ledger.advance_boundary(replayed_at).await?;
        let holdover = ledger.state().holdover().clone();

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            titles = holdover.len(),
            "Holdover list replayed"
        );

        Ok(ReplayHoldoverResult {
            holdover,
            next_boundary: replayed_at,
        })
    }
}
