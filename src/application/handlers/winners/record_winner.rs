//! RecordWinnerHandler - appends a search result to the winner history.

use std::sync::Arc;

use thiserror::Error;

use crate::application::handlers::movies::SearchSession;
use crate::application::ledger::{Ledger, LedgerError};
use crate::domain::foundation::CommandMetadata;
use crate::domain::registry::WinnerRecord;
use crate::ports::{CatalogError, MovieCatalog};

#[derive(Debug, Clone)]
pub struct RecordWinnerCommand {
    /// 1-based index into the last search.
    pub display_index: usize,
}

#[derive(Debug, Error)]
pub enum RecordWinnerError {
    #[error("No search result at that index")]
    NoSearchResult,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub struct RecordWinnerHandler {
    ledger: Arc<Ledger>,
    catalog: Arc<dyn MovieCatalog>,
    session: SearchSession,
}

impl RecordWinnerHandler {
    pub fn new(ledger: Arc<Ledger>, catalog: Arc<dyn MovieCatalog>, session: SearchSession) -> Self {
        Self {
            ledger,
            catalog,
            session,
        }
    }

    /// Returns the stored record.
    pub async fn handle(
        &self,
        cmd: RecordWinnerCommand,
        metadata: CommandMetadata,
    ) -> Result<WinnerRecord, RecordWinnerError> {
        let hit = self
            .session
            .get(cmd.display_index)
            .ok_or(RecordWinnerError::NoSearchResult)?;

        let details = self.catalog.details(&hit.movie_id).await?;
        let title = details.title.unwrap_or(hit.long_title);
        let record = WinnerRecord::new(title, hit.movie_id);

        self.ledger.lock().await.append_winner(record.clone()).await?;

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            title = %record.title,
            movie_id = %record.movie_id,
            "Winner recorded"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalog;
    use crate::application::ledger::test_support::MemoryStores;
    use crate::domain::foundation::{ChannelId, MovieId, Timestamp};
    use crate::domain::movie::{MovieDetails, SearchResult};

    #[tokio::test]
    async fn appends_catalog_title_and_id() {
        let id = MovieId::new("0076162").unwrap();
        let catalog = InMemoryCatalog::new().with_movie(MovieDetails {
            movie_id: Some(id.clone()),
            title: Some("Hausu".into()),
            ..Default::default()
        });
        let session = SearchSession::new();
        session.store(vec![SearchResult {
            movie_id: id.clone(),
            long_title: "Hausu (1977)".into(),
        }]);
        let memory = MemoryStores::new(&[], Timestamp::now());
        let handler = RecordWinnerHandler::new(
            Arc::new(memory.ledger().await),
            Arc::new(catalog),
            session,
        );

        let record = handler
            .handle(
                RecordWinnerCommand { display_index: 1 },
                CommandMetadata::new(ChannelId::new(1)),
            )
            .await
            .unwrap();

        assert_eq!(record, WinnerRecord::new("Hausu", id));
        assert_eq!(memory.winners.rows().await, Some(vec![record]));
    }

    #[tokio::test]
    async fn requires_prior_search() {
        let memory = MemoryStores::new(&[], Timestamp::now());
        let handler = RecordWinnerHandler::new(
            Arc::new(memory.ledger().await),
            Arc::new(InMemoryCatalog::new()),
            SearchSession::new(),
        );

        let result = handler
            .handle(
                RecordWinnerCommand { display_index: 1 },
                CommandMetadata::new(ChannelId::new(1)),
            )
            .await;

        assert!(matches!(result, Err(RecordWinnerError::NoSearchResult)));
        assert_eq!(memory.winners.write_count(), 0);
    }
}
