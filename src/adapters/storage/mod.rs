//! Storage Adapters
//!
//! Implementations of the RegistryStore port.
//!
//! ## Available Adapters
//!
//! - **FileRegistryStore** - One YAML file per registry, atomic replace
//! - **InMemoryRegistryStore** - Rows in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRegistryStore, InMemoryRegistryStore};
//!
//! // Production: file-based storage
//! let fallen: FileRegistryStore<String> = FileRegistryStore::new("./data/fallen.yaml");
//!
//! // Testing: in-memory storage
//! let fallen = InMemoryRegistryStore::new("fallen", vec!["Hackers".to_string()]);
//! ```

mod file_registry_store;
mod in_memory_registry_store;

pub use file_registry_store::FileRegistryStore;
pub use in_memory_registry_store::InMemoryRegistryStore;
