//! Fallen handlers - browsing and pruning the fallen registry.

mod list_fallen;
mod remove_fallen;

pub use list_fallen::{
    FallenPick, ListFallenHandler, ListFallenQuery, RandomFallenHandler, RandomFallenQuery,
};
pub use remove_fallen::{RemoveFallenCommand, RemoveFallenHandler};
