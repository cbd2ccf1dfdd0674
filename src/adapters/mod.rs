//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Registry stores (YAML files, in-memory)
//! - `channel` - Nomination channel history (in-memory, JSON snapshots)
//! - `wheel` - External randomizer (Wheel of Names HTTP API, mock)
//! - `catalog` - Movie metadata (in-memory fixture)

pub mod catalog;
pub mod channel;
pub mod storage;
pub mod wheel;

pub use catalog::InMemoryCatalog;
pub use channel::{load_snapshot, InMemoryChannel, PostedMessage};
pub use storage::{FileRegistryStore, InMemoryRegistryStore};
pub use wheel::{MockWheelService, WheelOfNamesClient, WheelOfNamesConfig};
