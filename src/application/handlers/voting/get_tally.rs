//! GetTallyHandler - vote totals for the current window.

use std::sync::Arc;

use crate::application::ledger::Ledger;
use crate::application::window::WindowReader;
use crate::domain::foundation::Timestamp;
use crate::domain::nomination::{ranked, tally, ExclusionSet, VoteTally};
use crate::ports::ChannelError;

/// Query for the current window's tally.
#[derive(Debug, Clone, Default)]
pub struct GetTallyQuery;

/// Tally of the current window.
#[derive(Debug, Clone)]
pub struct TallyReport {
    pub as_of: Timestamp,
    /// Non-excluded nominations with at least one reaction, most votes first.
    pub ranking: Vec<VoteTally>,
    /// Distinct titles nominated in the window, exclusions included.
    pub movie_count: usize,
}

impl TallyReport {
    /// Sum of votes over the ranking.
    pub fn vote_count(&self) -> u32 {
        self.ranking
            .iter()
            .fold(0u32, |total, t| total.saturating_add(t.total_votes))
    }
}

pub struct GetTallyHandler {
    ledger: Arc<Ledger>,
    window: WindowReader,
}

impl GetTallyHandler {
    pub fn new(ledger: Arc<Ledger>, window: WindowReader) -> Self {
        Self { ledger, window }
    }

    pub async fn handle(&self, _query: GetTallyQuery) -> Result<TallyReport, ChannelError> {
        let state = self.ledger.snapshot().await;
        let as_of = Timestamp::now();

        let all = self
            .window
            .nominations(state.boundary(), &ExclusionSet::new())
            .await?;
        let movie_count = all.len();

        let eligible: Vec<_> = all
            .into_iter()
            .filter(|n| !state.exclusions().contains(&n.title))
            .collect();

        Ok(TallyReport {
            as_of,
            ranking: ranked(tally(&eligible)),
            movie_count,
        })
    }
}
