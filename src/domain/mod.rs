//! Domain layer - pure movie night logic with no I/O.
//!
//! - `foundation` - identifiers, timestamps, errors, message chunking
//! - `nomination` - window messages, exclusions, the reaction tally
//! - `cycle` - the cycle boundary and rollover classification
//! - `registry` - fallen registry, winner history, holdover list
//! - `wheel` - the weighted wheel list
//! - `movie` - catalog records and their display defaults

pub mod cycle;
pub mod foundation;
pub mod movie;
pub mod nomination;
pub mod registry;
pub mod wheel;
