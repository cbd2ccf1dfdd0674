//! Reading the current window from the nomination channel.

use std::sync::Arc;

use crate::domain::cycle::{Assessment, CycleBoundary};
use crate::domain::nomination::{collect_nominations, ExclusionSet, Nomination, VoterUnion};
use crate::ports::{ChannelError, ChannelHistory};

/// Nominations posted since a boundary, plus distinct-voter expansion.
#[derive(Clone)]
pub struct WindowReader {
    channel: Arc<dyn ChannelHistory>,
}

impl WindowReader {
    pub fn new(channel: Arc<dyn ChannelHistory>) -> Self {
        Self { channel }
    }

    /// Every non-excluded member nomination posted after `boundary`.
    pub async fn nominations(
        &self,
        boundary: CycleBoundary,
        exclusions: &ExclusionSet,
    ) -> Result<Vec<Nomination>, ChannelError> {
        let messages = self.channel.fetch_since(boundary.start).await?;
        let nominations = collect_nominations(&messages, exclusions);

        tracing::debug!(
            messages = messages.len(),
            nominations = nominations.len(),
            since = %boundary.start,
            "Read nomination window"
        );
        Ok(nominations)
    }

    /// Distinct members behind a nomination's reactions.
    ///
    /// Stops expanding once the promotion threshold is passed. A reaction
    /// whose voters cannot be fetched contributes nobody.
    pub async fn distinct_voters(&self, nomination: &Nomination) -> usize {
        let mut union = VoterUnion::new();

        for (message_id, reaction) in nomination.reactions() {
            match self.channel.reaction_voters(message_id, &reaction.symbol).await {
                Ok(voters) => union.extend(voters),
                Err(e) => {
                    tracing::warn!(
                        title = %nomination.title,
                        message_id = %message_id,
                        symbol = %reaction.symbol,
                        error = %e,
                        "Could not expand reaction voters"
                    );
                }
            }
            if union.is_decided() {
                break;
            }
        }

        union.count()
    }

    /// Distinct-voter assessment for each nomination.
    pub async fn assess(&self, nominations: &[Nomination]) -> Vec<Assessment> {
        let mut assessments = Vec::with_capacity(nominations.len());
        for nomination in nominations {
            let voters = self.distinct_voters(nomination).await;
            assessments.push(Assessment::new(nomination.title.clone(), voters));
        }
        assessments
    }
}
