//! Registry Store Port - Interface for the durable flat stores.
//!
//! Each registry (fallen titles, holdover titles, winner history, cycle
//! boundary) is kept in its own store. A store only knows how to load all
//! of its rows and replace all of them; there are no partial writes and no
//! transactions spanning two stores.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store not found: {0}")]
    NotFound(String),

    #[error("Failed to serialize rows: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize rows: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Store {store} must hold exactly one row, found {found}")]
    RowCount { store: String, found: usize },
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for one durable registry of rows of type `T`.
#[async_trait]
pub trait RegistryStore<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Load every row.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the store was never initialized.
    /// An initialized store with no rows loads as an empty vector.
    async fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Atomically replace every row.
    ///
    /// Readers observe either the old rows or the new rows, never a mix.
    async fn replace_all(&self, rows: &[T]) -> Result<(), StoreError>;

    /// Name used in logs and error messages.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_store() {
        let err = StoreError::NotFound("fallen.yaml".to_string());
        assert!(err.to_string().contains("fallen.yaml"));
    }

    #[test]
    fn row_count_error_reports_found() {
        let err = StoreError::RowCount {
            store: "rollover-time".to_string(),
            found: 2,
        };
        assert!(err.to_string().contains("exactly one row"));
        assert!(err.to_string().contains('2'));
    }
}
