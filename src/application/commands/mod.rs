//! Command surface - parsing, gating and reply formatting.

mod command;
mod dispatcher;
pub mod replies;

pub use command::{BotCommand, CommandName, ParseError};
pub use dispatcher::{Collaborators, CommandDispatcher, DispatcherSettings};
