//! HTTP client configuration from TOML (`[http]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw HTTP client configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Transport timeout in seconds; unset means no timeout
    pub timeout_secs: Option<u64>,
    /// Overrides the default `pet-duel/<version>` user agent
    pub user_agent: Option<String>,
}

impl FileHttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
