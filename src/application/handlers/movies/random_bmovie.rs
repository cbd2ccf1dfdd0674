//! RandomBMovieHandler - draws an eligible movie from the b-movie pool.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::domain::movie::{bmovie, MovieSummary};
use crate::ports::{CatalogError, MovieCatalog};

#[derive(Debug, Clone, Default)]
pub struct RandomBMovieQuery;

#[derive(Debug, Error)]
pub enum RandomBMovieError {
    #[error("B-movie pool is empty")]
    EmptyPool,

    #[error("No eligible movie after {0} attempts")]
    Exhausted(u32),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub struct RandomBMovieHandler {
    catalog: Arc<dyn MovieCatalog>,
    max_attempts: u32,
    rng: Mutex<StdRng>,
}

impl RandomBMovieHandler {
    pub fn new(catalog: Arc<dyn MovieCatalog>, max_attempts: u32) -> Self {
        Self::with_rng(catalog, max_attempts, StdRng::from_entropy())
    }

    pub fn with_rng(catalog: Arc<dyn MovieCatalog>, max_attempts: u32, rng: StdRng) -> Self {
        Self {
            catalog,
            max_attempts,
            rng: Mutex::new(rng),
        }
    }

    pub async fn handle(&self, _query: RandomBMovieQuery) -> Result<MovieSummary, RandomBMovieError> {
        let pool = self.catalog.bmovie_pool().await?;
        if pool.is_empty() {
            return Err(RandomBMovieError::EmptyPool);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = {
                let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                pool.choose(&mut *rng).cloned()
            };
            let Some(movie_id) = candidate else {
                break;
            };

            let details = self.catalog.details(&movie_id).await?;
            if bmovie::is_eligible(&details) {
                tracing::debug!(movie_id = %movie_id, attempt, "Picked random b-movie");
                return Ok(details.summary(&movie_id));
            }
        }

        Err(RandomBMovieError::Exhausted(self.max_attempts))
    }
}
