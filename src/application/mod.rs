//! Application layer - command handlers and the command dispatcher.
//!
//! Handlers orchestrate domain operations through the ports. The ledger
//! serializes every registry mutation; the window reader wraps the
//! nomination channel.

pub mod commands;
pub mod handlers;
pub mod ledger;
pub mod window;

pub use commands::{Collaborators, CommandDispatcher, DispatcherSettings};
pub use ledger::{Ledger, LedgerError, LedgerState, RegistryStores};
pub use window::WindowReader;
