//! Winner history queries: the listing and the estimated total runtime.

use std::sync::Arc;

use crate::application::ledger::Ledger;
use crate::domain::movie::estimated_total_runtime;
use crate::domain::registry::WinnerRecord;
use crate::ports::MovieCatalog;

#[derive(Debug, Clone, Default)]
pub struct ListWinnersQuery;

pub struct ListWinnersHandler {
    ledger: Arc<Ledger>,
}

impl ListWinnersHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    /// Records in chronological order.
    pub async fn handle(&self, _query: ListWinnersQuery) -> Vec<WinnerRecord> {
        self.ledger.snapshot().await.winners().to_rows()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WinnersRuntimeQuery;

pub struct WinnersRuntimeHandler {
    ledger: Arc<Ledger>,
    catalog: Arc<dyn MovieCatalog>,
}

impl WinnersRuntimeHandler {
    pub fn new(ledger: Arc<Ledger>, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { ledger, catalog }
    }

    /// Total minutes. A winner whose runtime cannot be found counts as the default.
    pub async fn handle(&self, _query: WinnersRuntimeQuery) -> u32 {
        let winners = self.ledger.snapshot().await.winners().to_rows();

        let mut runtimes = Vec::with_capacity(winners.len());
        for record in &winners {
            let runtime = match self.catalog.details(&record.movie_id).await {
                Ok(details) => details.runtime_minutes(),
                Err(e) => {
                    tracing::warn!(title = %record.title, error = %e, "Runtime lookup failed");
                    None
                }
            };
            runtimes.push(runtime);
        }

        estimated_total_runtime(runtimes)
    }
}
