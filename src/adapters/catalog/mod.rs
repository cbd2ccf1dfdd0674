//! Catalog Adapters
//!
//! Implementations of the MovieCatalog port.
//!
//! - **InMemoryCatalog** - fixed records loaded from code or a JSON fixture

mod in_memory_catalog;

pub use in_memory_catalog::{CatalogEntry, InMemoryCatalog, SEARCH_LIMIT};
