//! Wheel Adapters
//!
//! Implementations of the WheelService port.
//!
//! - **WheelOfNamesClient** - wheelofnames.com shared-wheel API
//! - **MockWheelService** - queued outcomes for tests

mod mock_wheel_service;
mod wheel_of_names;

pub use mock_wheel_service::MockWheelService;
pub use wheel_of_names::{WheelOfNamesClient, WheelOfNamesConfig};
