//! Movie module - catalog records, display defaults and pick rules.

pub mod bmovie;
mod details;

pub use details::{
    estimated_total_runtime, imdb_url, MovieDetails, MovieSummary, SearchResult,
    DEFAULT_RUNTIME_MINUTES, NOT_AVAILABLE, UNAVAILABLE,
};
