//! Vote configuration from TOML (`[vote]` section)

use duel_application::DEFAULT_CLEAR_DELAY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw vote configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVoteConfig {
    /// Milliseconds the voted picture stays visible
    pub clear_delay_ms: u64,
}

impl Default for FileVoteConfig {
    fn default() -> Self {
        Self {
            clear_delay_ms: DEFAULT_CLEAR_DELAY.as_millis() as u64,
        }
    }
}

impl FileVoteConfig {
    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }
}
