//! ManageExclusionsHandler - the transient list of already-decided titles.
//!
//! Excluded titles are skipped by the tally, the wheel and rollover. The
//! list lives only as long as the process.

use std::sync::Arc;

use crate::application::ledger::Ledger;
use crate::domain::foundation::CommandMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionCommand {
    Add(String),
    List,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionResult {
    Added { title: String, was_new: bool },
    Listed(Vec<String>),
    Cleared,
}

pub struct ManageExclusionsHandler {
    ledger: Arc<Ledger>,
}

impl ManageExclusionsHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, cmd: ExclusionCommand, metadata: CommandMetadata) -> ExclusionResult {
        let mut ledger = self.ledger.lock().await;
        match cmd {
            ExclusionCommand::Add(title) => {
                let was_new = ledger.exclude(title.clone());
                tracing::info!(
                    correlation_id = %metadata.correlation_id(),
                    title = %title,
                    "Title excluded"
                );
                ExclusionResult::Added { title, was_new }
            }
            ExclusionCommand::List => ExclusionResult::Listed(
                ledger
                    .state()
                    .exclusions()
                    .iter()
                    .map(str::to_string)
                    .collect(),
            ),
            ExclusionCommand::Clear => {
                ledger.clear_exclusions();
                tracing::info!(correlation_id = %metadata.correlation_id(), "Exclusions cleared");
                ExclusionResult::Cleared
            }
        }
    }
}
