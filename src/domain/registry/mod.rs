//! Registry module - the durable lists carried across cycles.
//!
//! Each registry is a plain value: it is loaded from its store, transformed,
//! and written back whole. Persistence lives behind `ports::RegistryStore`.

mod errors;
mod fallen;
mod holdover;
mod winners;

pub use errors::RegistryError;
pub use fallen::FallenRegistry;
pub use holdover::HoldoverList;
pub use winners::{WinnerHistory, WinnerRecord};
