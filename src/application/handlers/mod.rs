//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler owns `Arc`s of the ports it needs and exposes one `handle`.

pub mod cycle;
pub mod fallen;
pub mod movies;
pub mod voting;
pub mod wheel;
pub mod winners;
