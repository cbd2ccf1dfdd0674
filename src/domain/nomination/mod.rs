//! Nomination module - window messages, exclusions and the reaction tally.

mod exclusion;
mod message;
mod tally;

pub use exclusion::ExclusionSet;
pub use message::{MessageOrigin, Reaction, WindowMessage};
pub use tally::{
    collect_nominations, ranked, tally, Nomination, Posting, VoteTally, VoterUnion,
    PROMOTION_THRESHOLD,
};
