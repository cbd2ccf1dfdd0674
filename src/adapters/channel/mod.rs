//! Channel Adapters
//!
//! Implementations of the ChannelHistory port.
//!
//! - **InMemoryChannel** - messages and voters held in memory
//! - **load_snapshot** - builds an InMemoryChannel from an exported JSON file

mod in_memory_channel;
mod json_snapshot;

pub use in_memory_channel::{InMemoryChannel, PostedMessage};
pub use json_snapshot::{load_snapshot, ChannelSnapshot, SnapshotError};
