//! Winner handlers - exclusions and the permanent winner history.

mod exclusions;
mod list_winners;
mod record_winner;

pub use exclusions::{ExclusionCommand, ExclusionResult, ManageExclusionsHandler};
pub use list_winners::{
    ListWinnersHandler, ListWinnersQuery, WinnersRuntimeHandler, WinnersRuntimeQuery,
};
pub use record_winner::{RecordWinnerCommand, RecordWinnerError, RecordWinnerHandler};
