//! Ledger - the registries shared by every command.
//!
//! The ledger loads the four durable registries once at start-up and keeps
//! them in memory alongside the transient exclusion set. All access goes
//! through one async mutex: a command takes the lock, reads what it needs
//! (including slow channel reads), and writes back through the stores
//! before releasing it. Two rollovers therefore never interleave.
//!
//! Every mutation is write-through. The new value is persisted first and
//! only then replaces the in-memory copy, so a failed write leaves the
//! cached registry matching what is on disk.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::cycle::CycleBoundary;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::nomination::ExclusionSet;
use crate::domain::registry::{
    FallenRegistry, HoldoverList, RegistryError, WinnerHistory, WinnerRecord,
};
use crate::ports::{RegistryStore, StoreError};

/// Errors raised by ledger mutations.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
}

impl From<LedgerError> for DomainError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Registry(e) => e.into(),
            LedgerError::Store(e) => e.into(),
        }
    }
}

/// The four durable stores behind the ledger.
#[derive(Clone)]
pub struct RegistryStores {
    pub fallen: Arc<dyn RegistryStore<String>>,
    pub holdover: Arc<dyn RegistryStore<String>>,
    pub winners: Arc<dyn RegistryStore<WinnerRecord>>,
    pub boundary: Arc<dyn RegistryStore<Timestamp>>,
}

/// In-memory copy of every registry.
#[derive(Debug, Clone)]
pub struct LedgerState {
    fallen: FallenRegistry,
    holdover: HoldoverList,
    winners: WinnerHistory,
    boundary: CycleBoundary,
    exclusions: ExclusionSet,
}

/// Single-writer owner of the registries.
pub struct Ledger {
    stores: RegistryStores,
    state: Mutex<LedgerState>,
}

impl Ledger {
    /// Load every registry. Any unreadable store is fatal.
    pub async fn open(stores: RegistryStores) -> Result<Self, StoreError> {
        let fallen = FallenRegistry::from_rows(stores.fallen.load().await?);
        let holdover = HoldoverList::from_rows(stores.holdover.load().await?);
        let winners = WinnerHistory::from_rows(stores.winners.load().await?);
        let boundary = load_boundary(stores.boundary.as_ref()).await?;

        tracing::info!(
            fallen = fallen.len(),
            holdover = holdover.len(),
            winners = winners.len(),
            boundary = %boundary.start,
            "Ledger loaded"
        );

        Ok(Self {
            stores,
            state: Mutex::new(LedgerState {
                fallen,
                holdover,
                winners,
                boundary,
                exclusions: ExclusionSet::new(),
            }),
        })
    }

    /// Write explicitly empty registries and a boundary of `now`, then open.
    ///
    /// Overwrites whatever the stores held before.
    pub async fn initialize(stores: RegistryStores, now: Timestamp) -> Result<Self, StoreError> {
        stores.fallen.replace_all(&[]).await?;
        stores.holdover.replace_all(&[]).await?;
        stores.winners.replace_all(&[]).await?;
        stores.boundary.replace_all(&[now]).await?;

        tracing::info!(boundary = %now, "Initialized empty registries");
        Self::open(stores).await
    }

    /// Take the ledger lock for the duration of one command.
    pub async fn lock(&self) -> LedgerGuard<'_> {
        LedgerGuard {
            stores: &self.stores,
            state: self.state.lock().await,
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> LedgerState {
        self.state.lock().await.clone()
    }
}

async fn load_boundary(store: &dyn RegistryStore<Timestamp>) -> Result<CycleBoundary, StoreError> {
    let rows = store.load().await?;
    match rows.as_slice() {
        [start] => Ok(CycleBoundary::new(*start)),
        _ => Err(StoreError::RowCount {
            store: store.name().to_string(),
            found: rows.len(),
        }),
    }
}

impl LedgerState {
    pub fn fallen(&self) -> &FallenRegistry {
        &self.fallen
    }

    pub fn holdover(&self) -> &HoldoverList {
        &self.holdover
    }

    pub fn winners(&self) -> &WinnerHistory {
        &self.winners
    }

    pub fn boundary(&self) -> CycleBoundary {
        self.boundary
    }

    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }
}

/// Exclusive access to the ledger for one command.
pub struct LedgerGuard<'a> {
    stores: &'a RegistryStores,
    state: MutexGuard<'a, LedgerState>,
}

impl LedgerGuard<'_> {
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Add a title to the exclusion set. Not persisted.
    pub fn exclude(&mut self, title: impl Into<String>) -> bool {
        self.state.exclusions.insert(title)
    }

    /// Empty the exclusion set.
    pub fn clear_exclusions(&mut self) {
        self.state.exclusions.clear();
    }

    /// Merge titles into the fallen registry; returns how many were new.
    pub async fn merge_fallen<I, S>(&mut self, titles: I) -> Result<usize, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fallen = self.state.fallen.clone();
        let added = fallen.merge(titles);
        self.stores.fallen.replace_all(&fallen.to_rows()).await?;
        self.state.fallen = fallen;
        Ok(added)
    }

    /// Remove the title at a 1-based display index; returns the title.
    pub async fn remove_fallen(&mut self, display_index: usize) -> Result<String, LedgerError> {
        let (fallen, removed) = self.state.fallen.without(display_index)?;
        self.stores.fallen.replace_all(&fallen.to_rows()).await?;
        self.state.fallen = fallen;
        Ok(removed)
    }

    /// Append one record to the winner history.
    pub async fn append_winner(&mut self, record: WinnerRecord) -> Result<(), LedgerError> {
        let winners = self.state.winners.with_appended(record);
        self.stores.winners.replace_all(&winners.to_rows()).await?;
        self.state.winners = winners;
        Ok(())
    }

    /// Replace the holdover list.
    pub async fn replace_holdover(&mut self, holdover: HoldoverList) -> Result<(), LedgerError> {
        self.stores.holdover.replace_all(&holdover.to_rows()).await?;
        self.state.holdover = holdover;
        Ok(())
    }

    /// Move the cycle boundary to `at`.
    pub async fn advance_boundary(&mut self, at: Timestamp) -> Result<(), LedgerError> {
        let boundary = self.state.boundary.advance_to(at);
        self.stores.boundary.replace_all(&[boundary.start]).await?;
        self.state.boundary = boundary;
        Ok(())
    }
}
