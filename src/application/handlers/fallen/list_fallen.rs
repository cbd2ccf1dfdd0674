//! Fallen registry queries: the sorted listing and a random pick.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::application::ledger::Ledger;
use crate::domain::registry::RegistryError;

#[derive(Debug, Clone, Default)]
pub struct ListFallenQuery;

/// Lists the fallen registry in display order.
pub struct ListFallenHandler {
    ledger: Arc<Ledger>,
}

impl ListFallenHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, _query: ListFallenQuery) -> Vec<String> {
        self.ledger.snapshot().await.fallen().to_rows()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RandomFallenQuery;

/// A uniformly chosen fallen title with its display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallenPick {
    pub display_index: usize,
    pub title: String,
}

/// Picks one fallen title at random.
pub struct RandomFallenHandler {
    ledger: Arc<Ledger>,
    rng: Mutex<StdRng>,
}

impl RandomFallenHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self::with_rng(ledger, StdRng::from_entropy())
    }

    pub fn with_rng(ledger: Arc<Ledger>, rng: StdRng) -> Self {
        Self {
            ledger,
            rng: Mutex::new(rng),
        }
    }

    pub async fn handle(&self, _query: RandomFallenQuery) -> Result<FallenPick, RegistryError> {
        let state = self.ledger.snapshot().await;
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let (display_index, title) = state.fallen().pick(&mut *rng)?;
        Ok(FallenPick {
            display_index,
            title: title.to_string(),
        })
    }
}
