//! Cycle handlers - closing a cycle and the holdover path.

mod record_holdover;
mod replay_holdover;
mod rollover;

pub use record_holdover::{
    RecordHoldoverCommand, RecordHoldoverError, RecordHoldoverHandler, RecordHoldoverResult,
};
pub use replay_holdover::{ReplayHoldoverCommand, ReplayHoldoverHandler, ReplayHoldoverResult};
pub use rollover::{RolloverCommand, RolloverError, RolloverHandler, RolloverResult};
