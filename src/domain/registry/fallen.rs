//! The fallen registry: titles retired from the wheel for good.

use std::collections::BTreeSet;

use rand::Rng;

use super::errors::{position, RegistryError};

/// Cumulative, deduplicated set of retired titles.
///
/// Sorted order (plain code point order) is both the on-disk order and the
/// display order; display indices are 1-based positions in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallenRegistry {
    titles: BTreeSet<String>,
}

impl FallenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from stored rows, collapsing any duplicates.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Rows to persist, in sorted order.
    pub fn to_rows(&self) -> Vec<String> {
        self.titles.iter().cloned().collect()
    }

    /// Adds demoted titles. Titles already fallen are left alone.
    ///
    /// Returns how many titles were new.
    pub fn merge<I, S>(&mut self, titles: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for title in titles {
            if self.titles.insert(title.into()) {
                added += 1;
            }
        }
        added
    }

    /// Returns a copy with the entry at `display_index` removed, plus that entry.
    pub fn without(&self, display_index: usize) -> Result<(Self, String), RegistryError> {
        let removed = self.get(display_index)?.to_string();
        let mut titles = self.titles.clone();
        titles.remove(&removed);
        Ok((Self { titles }, removed))
    }

    /// The entry at a 1-based display index.
    pub fn get(&self, display_index: usize) -> Result<&str, RegistryError> {
        let pos = position(display_index, self.titles.len())?;
        self.titles
            .iter()
            .nth(pos)
            .map(String::as_str)
            .ok_or(RegistryError::IndexOutOfRange {
                index: display_index,
                len: self.titles.len(),
            })
    }

    /// A uniformly random entry with its display index.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(usize, &str), RegistryError> {
        if self.titles.is_empty() {
            return Err(RegistryError::Empty);
        }
        let display_index = rng.gen_range(1..=self.titles.len());
        Ok((display_index, self.get(display_index)?))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Titles in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}
