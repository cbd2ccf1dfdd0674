//! Duplicate-weighted wheel entries.

use crate::domain::foundation::chunk_lines;
use crate::domain::nomination::VoteTally;

/// Flat list of wheel entries. A title with `k` votes appears `k` times.
///
/// Order follows the window; shuffling is the randomizer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WheelList {
    entries: Vec<String>,
}

impl WheelList {
    /// One entry per vote, in tally order.
    pub fn weighted(tallies: &[VoteTally]) -> Self {
        let entries = tallies
            .iter()
            .flat_map(|t| std::iter::repeat(t.title.clone()).take(t.total_votes as usize))
            .collect();
        Self { entries }
    }

    /// One entry per title (used for the fallen wheel).
    pub fn unweighted<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: titles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newline-separated text for when the randomizer is unreachable,
    /// split into messages of at most `limit` characters.
    pub fn render_chunks(&self, limit: usize) -> Vec<String> {
        chunk_lines(&self.entries, limit)
    }
}
