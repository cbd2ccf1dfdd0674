//! In-Memory Registry Store Adapter
//!
//! Holds one registry in memory. Useful for testing and development;
//! supports write-failure injection and write counting.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{RegistryStore, StoreError};

/// In-memory storage for one registry
#[derive(Debug, Clone)]
pub struct InMemoryRegistryStore<T> {
    name: String,
    /// `None` models a store that was never initialized.
    rows: Arc<RwLock<Option<Vec<T>>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl<T> InMemoryRegistryStore<T> {
    /// Create an initialized store holding `rows`
    pub fn new(name: impl Into<String>, rows: Vec<T>) -> Self {
        Self {
            name: name.into(),
            rows: Arc::new(RwLock::new(Some(rows))),
            fail_writes: Arc::new(AtomicBool::new(false)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a store that was never initialized; `load` fails with `NotFound`
    pub fn uninitialized(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Arc::new(RwLock::new(None)),
            fail_writes: Arc::new(AtomicBool::new(false)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make subsequent `replace_all` calls fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `replace_all` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<T: Clone> InMemoryRegistryStore<T> {
    /// Current rows, bypassing the port
    pub async fn rows(&self) -> Option<Vec<T>> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl<T> RegistryStore<T> for InMemoryRegistryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        self.rows
            .read()
            .await
            .clone()
            .ok_or_else(|| StoreError::NotFound(self.name.clone()))
    }

    async fn replace_all(&self, rows: &[T]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::IoError(format!(
                "simulated write failure for {}",
                self.name
            )));
        }
        *self.rows.write().await = Some(rows.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
