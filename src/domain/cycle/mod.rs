//! Cycle module - the window boundary and rollover classification.

mod boundary;
mod classifier;

pub use boundary::CycleBoundary;
pub use classifier::{Assessment, Classification, RolloverPlan};
