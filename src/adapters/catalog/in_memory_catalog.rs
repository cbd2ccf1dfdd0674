//! In-Memory Movie Catalog Adapter
//!
//! A fixed set of movie records with trivia and a b-movie pool. Search is a
//! case-insensitive substring match on the title, capped at ten results.
//! Records can be loaded from a JSON fixture for the console harness.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::foundation::MovieId;
use crate::domain::movie::{MovieDetails, SearchResult};
use crate::ports::{CatalogError, MovieCatalog};

/// Maximum number of search results returned.
pub const SEARCH_LIMIT: usize = 10;

/// One movie in the fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub details: MovieDetails,
    #[serde(default)]
    pub trivia: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    movies: Vec<CatalogEntry>,
    #[serde(default)]
    bmovie_pool: Vec<MovieId>,
}

/// In-memory movie catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    order: Vec<MovieId>,
    movies: HashMap<MovieId, CatalogEntry>,
    pool: Vec<MovieId>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON fixture: `{"movies": [{"details": {...}, "trivia": [...]}], "bmovie_pool": [...]}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let fixture: CatalogFixture = serde_json::from_str(json)?;
        let catalog = fixture
            .movies
            .into_iter()
            .fold(Self::new(), |catalog, entry| catalog.with_entry(entry));
        Ok(catalog.with_bmovie_pool(fixture.bmovie_pool))
    }

    /// Builder: add a movie. Records without an id are ignored.
    pub fn with_movie(self, details: MovieDetails) -> Self {
        self.with_entry(CatalogEntry {
            details,
            trivia: Vec::new(),
        })
    }

    /// Builder: add a movie with trivia.
    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        if let Some(id) = entry.details.movie_id.clone() {
            if !self.movies.contains_key(&id) {
                self.order.push(id.clone());
            }
            self.movies.insert(id, entry);
        }
        self
    }

    /// Builder: set trivia for an existing movie.
    pub fn with_trivia(mut self, movie_id: &MovieId, facts: &[&str]) -> Self {
        if let Some(entry) = self.movies.get_mut(movie_id) {
            entry.trivia = facts.iter().map(|f| f.to_string()).collect();
        }
        self
    }

    /// Builder: set the b-movie pool.
    pub fn with_bmovie_pool(mut self, pool: Vec<MovieId>) -> Self {
        self.pool = pool;
        self
    }

    /// Make every lookup fail (or succeed again).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), CatalogError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(CatalogError::Unavailable("catalog offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn entry(&self, movie_id: &MovieId) -> Result<&CatalogEntry, CatalogError> {
        self.movies
            .get(movie_id)
            .ok_or_else(|| CatalogError::NotFound(movie_id.clone()))
    }
}

#[async_trait]
impl MovieCatalog for InMemoryCatalog {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, CatalogError> {
        self.check_available()?;

        let needle = query.trim().to_lowercase();
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.movies.get(id).map(|entry| (id, entry)))
            .filter(|(_, entry)| {
                entry
                    .details
                    .title
                    .as_deref()
                    .map(|t| t.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .take(SEARCH_LIMIT)
            .map(|(id, entry)| SearchResult {
                movie_id: id.clone(),
                long_title: entry
                    .details
                    .long_title
                    .clone()
                    .or_else(|| entry.details.title.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }

    async fn details(&self, movie_id: &MovieId) -> Result<MovieDetails, CatalogError> {
        self.check_available()?;
        Ok(self.entry(movie_id)?.details.clone())
    }

    async fn trivia(&self, movie_id: &MovieId) -> Result<Vec<String>, CatalogError> {
        self.check_available()?;
        Ok(self.entry(movie_id)?.trivia.clone())
    }

    async fn bmovie_pool(&self) -> Result<Vec<MovieId>, CatalogError> {
        self.check_available()?;
        Ok(self.pool.clone())
    }
}
