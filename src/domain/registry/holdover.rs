//! Nominations recorded ahead of time for a later wheel.

use crate::domain::nomination::VoteTally;

/// Titles captured from a window and replayed later in place of a live
/// tally (for instance when a themed night interrupts the regular cycle).
///
/// Holdover titles are never classified and never reach the fallen registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldoverList {
    titles: Vec<String>,
}

impl HoldoverList {
    pub fn from_rows(titles: Vec<String>) -> Self {
        Self { titles }
    }

    /// Snapshot of every nomination that received a vote, sorted by title.
    pub fn from_tallies(tallies: &[VoteTally]) -> Self {
        let mut titles: Vec<String> = tallies.iter().map(|t| t.title.clone()).collect();
        titles.sort();
        titles.dedup();
        Self { titles }
    }

    pub fn to_rows(&self) -> Vec<String> {
        self.titles.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
