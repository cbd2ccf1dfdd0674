//! Past movie night winners.

use serde::{Deserialize, Serialize};

use super::errors::{position, RegistryError};
use crate::domain::foundation::MovieId;

/// One past winner: its display title and catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub title: String,
    pub movie_id: MovieId,
}

impl WinnerRecord {
    pub fn new(title: impl Into<String>, movie_id: MovieId) -> Self {
        Self {
            title: title.into(),
            movie_id,
        }
    }
}

/// Append-only, chronological list of winners.
///
/// The 1-based position is the index used by runtime and trivia lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinnerHistory {
    records: Vec<WinnerRecord>,
}

impl WinnerHistory {
    pub fn from_rows(records: Vec<WinnerRecord>) -> Self {
        Self { records }
    }

    pub fn to_rows(&self) -> Vec<WinnerRecord> {
        self.records.clone()
    }

    /// Returns a copy with `record` appended.
    pub fn with_appended(&self, record: WinnerRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    pub fn get(&self, display_index: usize) -> Result<&WinnerRecord, RegistryError> {
        let pos = position(display_index, self.records.len())?;
        Ok(&self.records[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WinnerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, id: &str) -> WinnerRecord {
        WinnerRecord::new(title, MovieId::new(id).unwrap())
    }

    #[test]
    fn append_keeps_chronological_order() {
        let history = WinnerHistory::default()
            .with_appended(record("Hausu", "0076162"))
            .with_appended(record("Hackers", "0113243"));

        assert_eq!(history.get(1).unwrap().title, "Hausu");
        assert_eq!(history.get(2).unwrap().title, "Hackers");
    }

    #[test]
    fn get_out_of_range() {
        let history = WinnerHistory::from_rows(vec![record("Hausu", "0076162")]);
        assert_eq!(
            history.get(2),
            Err(RegistryError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn rows_deserialize_from_yaml() {
        let rows: Vec<WinnerRecord> =
            serde_yaml::from_str("- title: Hausu\n  movie_id: '0076162'\n").unwrap();
        assert_eq!(rows[0].movie_id.as_str(), "0076162");
    }
}
