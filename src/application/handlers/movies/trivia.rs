//! TriviaHandler - trivia for a past winner.

use std::sync::Arc;

use thiserror::Error;

use crate::application::ledger::Ledger;
use crate::domain::registry::RegistryError;
use crate::ports::{CatalogError, MovieCatalog};

#[derive(Debug, Clone)]
pub struct TriviaQuery {
    /// 1-based index into the winner history.
    pub display_index: usize,
}

#[derive(Debug, Clone)]
pub struct TriviaResult {
    pub title: String,
    pub facts: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TriviaError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub struct TriviaHandler {
    ledger: Arc<Ledger>,
    catalog: Arc<dyn MovieCatalog>,
}

impl TriviaHandler {
    pub fn new(ledger: Arc<Ledger>, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { ledger, catalog }
    }

    pub async fn handle(&self, query: TriviaQuery) -> Result<TriviaResult, TriviaError> {
        let record = self
            .ledger
            .snapshot()
            .await
            .winners()
            .get(query.display_index)?
            .clone();

        let facts = self.catalog.trivia(&record.movie_id).await?;
        Ok(TriviaResult {
            title: record.title,
            facts,
        })
    }
}
