//! Channel routing configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::ChannelId;

/// The channels the bot reads from and answers in
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelsConfig {
    /// Channel where members post nominations and react to vote
    pub nomination: u64,

    /// Operator channel where most commands are accepted
    pub terminal: u64,

    /// Optional second operator channel for trying commands out
    pub test: Option<u64>,
}

impl ChannelsConfig {
    pub fn nomination_channel(&self) -> ChannelId {
        ChannelId::new(self.nomination)
    }

    pub fn terminal_channel(&self) -> ChannelId {
        ChannelId::new(self.terminal)
    }

    /// Whether `channel` accepts operator-only commands
    pub fn is_operator_channel(&self, channel: ChannelId) -> bool {
        channel == self.terminal_channel() || self.test.map(ChannelId::new) == Some(channel)
    }

    /// Validate channel configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nomination == 0 || self.terminal == 0 || self.test == Some(0) {
            return Err(ValidationError::InvalidChannelId);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> ChannelsConfig {
        ChannelsConfig {
            nomination: 100,
            terminal: 200,
            test: Some(300),
        }
    }

    #[test]
    fn test_operator_channels() {
        let config = channels();
        assert!(config.is_operator_channel(ChannelId::new(200)));
        assert!(config.is_operator_channel(ChannelId::new(300)));
        assert!(!config.is_operator_channel(ChannelId::new(100)));
    }

    #[test]
    fn test_without_test_channel() {
        let config = ChannelsConfig {
            test: None,
            ..channels()
        };
        assert!(!config.is_operator_channel(ChannelId::new(300)));
    }

    #[test]
    fn test_zero_channel_rejected() {
        let config = ChannelsConfig {
            terminal: 0,
            ..channels()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidChannelId));
    }
}
