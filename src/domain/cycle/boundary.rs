//! The instant the current voting cycle started.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Start of the current window. Messages posted after this instant belong
/// to the cycle in progress.
///
/// Exactly one boundary exists at a time. Rollover and the holdover path
/// replace it wholesale; nothing edits it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBoundary {
    pub start: Timestamp,
}

impl CycleBoundary {
    pub fn new(start: Timestamp) -> Self {
        Self { start }
    }

    /// A new boundary at `at`. Used when a cycle closes.
    pub fn advance_to(&self, at: Timestamp) -> Self {
        Self { start: at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_replaces_start() {
        let first = CycleBoundary::new(Timestamp::now().minus_days(7));
        let now = Timestamp::now();
        let next = first.advance_to(now);
        assert_eq!(next.start, now);
        assert!(first.start.is_before(&next.start));
    }

    #[test]
    fn serializes_as_single_naive_row() {
        let boundary: CycleBoundary =
            serde_yaml::from_str("start: 2023-10-28T22:00:00\n").unwrap();
        assert_eq!(boundary.start.to_string(), "2023-10-28 22:00:00");
    }
}
