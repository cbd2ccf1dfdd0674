//! Movie Night - nomination, voting and rollover ledger
//!
//! Members nominate movies in a channel and vote with reactions. Each week
//! the cycle is closed: well-supported titles go on next week's wheel and
//! the rest are retired to The Fallen. This crate keeps those registries
//! and answers the channel commands that drive them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
