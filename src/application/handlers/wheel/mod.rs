//! Wheel handlers - talking to the external randomizer.

mod purge_wheels;
mod spin_fallen_wheel;
mod spin_wheel;

pub use purge_wheels::{PurgeOutcome, PurgeWheelsCommand, PurgeWheelsHandler};
pub use spin_fallen_wheel::{SpinFallenWheelCommand, SpinFallenWheelHandler};
pub use spin_wheel::{SpinWheelCommand, SpinWheelHandler, SpinWheelResult};
