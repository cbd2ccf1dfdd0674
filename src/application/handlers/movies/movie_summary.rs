//! MovieSummaryHandler - details for one of the last search results.

use std::sync::Arc;

use thiserror::Error;

use super::SearchSession;
use crate::domain::movie::{MovieDetails, MovieSummary};
use crate::ports::{CatalogError, MovieCatalog};

#[derive(Debug, Clone)]
pub struct MovieSummaryQuery {
    /// 1-based index into the last search.
    pub display_index: usize,
}

#[derive(Debug, Error)]
pub enum MovieQueryError {
    #[error("No search result at that index")]
    NoSearchResult,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub struct MovieSummaryHandler {
    catalog: Arc<dyn MovieCatalog>,
    session: SearchSession,
}

impl MovieSummaryHandler {
    pub fn new(catalog: Arc<dyn MovieCatalog>, session: SearchSession) -> Self {
        Self { catalog, session }
    }

    /// Missing fields become placeholders. A record the catalog cannot
    /// return at all is rendered from placeholders too.
    pub async fn handle(&self, query: MovieSummaryQuery) -> Result<MovieSummary, MovieQueryError> {
        let hit = self
            .session
            .get(query.display_index)
            .ok_or(MovieQueryError::NoSearchResult)?;

        let details = match self.catalog.details(&hit.movie_id).await {
            Ok(details) => details,
            Err(CatalogError::NotFound(id)) => {
                tracing::warn!(movie_id = %id, "Search hit has no catalog record");
                MovieDetails::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(details.summary(&hit.movie_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalog;
    use crate::domain::foundation::MovieId;
    use crate::domain::movie::{SearchResult, NOT_AVAILABLE, UNAVAILABLE};

    fn session_with(id: &str) -> SearchSession {
        let session = SearchSession::new();
        session.store(vec![SearchResult {
            movie_id: MovieId::new(id).unwrap(),
            long_title: "Hausu (1977)".into(),
        }]);
        session
    }

    #[tokio::test]
    async fn summary_uses_defaults_for_missing_fields() {
        let catalog = InMemoryCatalog::new().with_movie(MovieDetails {
            movie_id: Some(MovieId::new("0076162").unwrap()),
            long_title: Some("Hausu (1977)".into()),
            runtimes: vec![88],
            ..Default::default()
        });
        let handler = MovieSummaryHandler::new(Arc::new(catalog), session_with("0076162"));

        let summary = handler
            .handle(MovieSummaryQuery { display_index: 1 })
            .await
            .unwrap();

        assert_eq!(summary.title, "Hausu (1977)");
        assert_eq!(summary.description, UNAVAILABLE);
        assert_eq!(summary.score, NOT_AVAILABLE);
        assert_eq!(summary.runtime, "88 minutes");
        assert_eq!(summary.url, "https://www.imdb.com/title/tt0076162");
    }

    #[tokio::test]
    async fn without_search_is_rejected() {
        let handler = MovieSummaryHandler::new(Arc::new(InMemoryCatalog::new()), SearchSession::new());

        let result = handler.handle(MovieSummaryQuery { display_index: 1 }).await;

        assert!(matches!(result, Err(MovieQueryError::NoSearchResult)));
    }
}
