//! The most recent catalog search, shared by the commands that index into it.

use std::sync::{Arc, RwLock};

use crate::domain::movie::SearchResult;

/// Last search results, process-wide. Later searches replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    results: Arc<RwLock<Option<Vec<SearchResult>>>>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, results: Vec<SearchResult>) {
        *self
            .results
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(results);
    }

    /// The result at a 1-based index, if a search has run and the index is valid.
    pub fn get(&self, display_index: usize) -> Option<SearchResult> {
        let results = self
            .results
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        results
            .as_ref()?
            .get(display_index.checked_sub(1)?)
            .cloned()
    }
}
