//! SpinWheelHandler - sends the weighted window to the randomizer.
//!
//! Any failure from the randomizer is not an error: the caller gets the
//! same list back to post as text instead.

use std::sync::Arc;

use crate::application::ledger::Ledger;
use crate::application::window::WindowReader;
use crate::domain::foundation::CommandMetadata;
use crate::domain::nomination::tally;
use crate::domain::wheel::WheelList;
use crate::ports::{ChannelError, WheelService};

#[derive(Debug, Clone, Default)]
pub struct SpinWheelCommand;

#[derive(Debug, Clone)]
pub enum SpinWheelResult {
    /// The randomizer accepted the list.
    Submitted { url: String, entries: usize },
    /// The randomizer failed; post the list directly.
    Fallback { list: WheelList, status: Option<u16> },
}

pub struct SpinWheelHandler {
    ledger: Arc<Ledger>,
    window: WindowReader,
    wheel: Arc<dyn WheelService>,
}

impl SpinWheelHandler {
    pub fn new(ledger: Arc<Ledger>, window: WindowReader, wheel: Arc<dyn WheelService>) -> Self {
        Self {
            ledger,
            window,
            wheel,
        }
    }

    pub async fn handle(
        &self,
        _cmd: SpinWheelCommand,
        metadata: CommandMetadata,
    ) -> Result<SpinWheelResult, ChannelError> {
        let state = self.ledger.snapshot().await;
        let nominations = self
            .window
            .nominations(state.boundary(), state.exclusions())
            .await?;
        let list = WheelList::weighted(&tally(&nominations));

        match self.wheel.submit(list.entries()).await {
            Ok(shared) => {
                tracing::info!(
                    correlation_id = %metadata.correlation_id(),
                    entries = list.len(),
                    path = %shared.path,
                    "Wheel submitted"
                );
                Ok(SpinWheelResult::Submitted {
                    url: self.wheel.share_url(&shared),
                    entries: list.len(),
                })
            }
            Err(e) => {
                tracing::warn!(
                    correlation_id = %metadata.correlation_id(),
                    error = %e,
                    "Wheel submission failed, falling back to text"
                );
                Ok(SpinWheelResult::Fallback {
                    status: e.status_code(),
                    list,
                })
            }
        }
    }
}
