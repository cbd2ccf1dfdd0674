//! SearchMoviesHandler - catalog search, remembered for follow-up commands.

use std::sync::Arc;

use super::SearchSession;
use crate::domain::movie::SearchResult;
use crate::ports::{CatalogError, MovieCatalog};

/// Maximum number of results shown and remembered.
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone)]
pub struct SearchMoviesQuery {
    pub title: String,
}

pub struct SearchMoviesHandler {
    catalog: Arc<dyn MovieCatalog>,
    session: SearchSession,
}

impl SearchMoviesHandler {
    pub fn new(catalog: Arc<dyn MovieCatalog>, session: SearchSession) -> Self {
        Self { catalog, session }
    }

    pub async fn handle(&self, query: SearchMoviesQuery) -> Result<Vec<SearchResult>, CatalogError> {
        let mut results = self.catalog.search(&query.title).await?;
        results.truncate(MAX_RESULTS);

        tracing::debug!(query = %query.title, results = results.len(), "Catalog search");
        self.session.store(results.clone());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryCatalog;
    use crate::domain::foundation::MovieId;
    use crate::domain::movie::MovieDetails;

    #[tokio::test]
    async fn search_results_are_remembered() {
        let catalog = InMemoryCatalog::new().with_movie(MovieDetails {
            movie_id: Some(MovieId::new("0076162").unwrap()),
            title: Some("Hausu".to_string()),
            long_title: Some("Hausu (1977)".to_string()),
            ..Default::default()
        });
        let session = SearchSession::new();
        let handler = SearchMoviesHandler::new(Arc::new(catalog), session.clone());

        let results = handler
            .handle(SearchMoviesQuery { title: "hausu".into() })
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(session.get(1).unwrap().long_title, "Hausu (1977)");
    }
}
