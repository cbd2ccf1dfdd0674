//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RegistryStore` - durable flat stores for the registries
//! - `ChannelHistory` - the nomination channel window and reaction voters
//! - `WheelService` - the external randomizer
//! - `MovieCatalog` - movie metadata search, details and trivia

mod channel_history;
mod movie_catalog;
mod registry_store;
mod wheel_service;

pub use channel_history::{ChannelError, ChannelHistory};
pub use movie_catalog::{CatalogError, MovieCatalog};
pub use registry_store::{RegistryStore, StoreError};
pub use wheel_service::{SharedWheel, WheelService, WheelServiceError};
