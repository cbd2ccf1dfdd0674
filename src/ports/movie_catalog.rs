//! Movie Catalog Port - Interface for movie metadata lookups.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, MovieId};
use crate::domain::movie::{MovieDetails, SearchResult};

/// Errors from the movie catalog.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogError, err.to_string())
    }
}

/// Port for movie search, details and trivia.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search by title; best matches first.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, CatalogError>;

    /// Full record for one movie. Missing fields are `None`/empty.
    async fn details(&self, movie_id: &MovieId) -> Result<MovieDetails, CatalogError>;

    /// Trivia facts for one movie.
    async fn trivia(&self, movie_id: &MovieId) -> Result<Vec<String>, CatalogError>;

    /// Candidate ids for the random B-movie pick.
    async fn bmovie_pool(&self) -> Result<Vec<MovieId>, CatalogError>;
}
