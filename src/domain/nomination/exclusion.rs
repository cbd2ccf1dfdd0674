//! Titles already decided for the current cycle.

use std::collections::BTreeSet;

/// In-memory set of titles marked as "already decided" (typically this
/// week's winners). Excluded titles are skipped by the tally, the wheel
/// and the rollover, so they neither reappear next cycle nor fall.
///
/// Lives for the lifetime of the process; cleared only by operator action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    titles: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a title; returns false if it was already excluded.
    pub fn insert(&mut self, title: impl Into<String>) -> bool {
        self.titles.insert(title.into())
    }

    /// Exact string match, no normalization.
    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn clear(&mut self) {
        self.titles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_exact() {
        let set: ExclusionSet = ["Hausu"].into_iter().collect();
        assert!(set.contains("Hausu"));
        assert!(!set.contains("hausu"));
        assert!(!set.contains("Hausu "));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = ExclusionSet::new();
        assert!(set.insert("Hackers"));
        assert!(!set.insert("Hackers"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set: ExclusionSet = ["A", "B"].into_iter().collect();
        set.clear();
        assert!(set.is_empty());
    }
}
