//! Voting handlers - read-only views of the current window.

mod get_tally;

pub use get_tally::{GetTallyHandler, GetTallyQuery, TallyReport};
