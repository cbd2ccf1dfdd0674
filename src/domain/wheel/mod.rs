//! Wheel module - the weighted list handed to the external randomizer.

mod wheel_list;

pub use wheel_list::WheelList;
