//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod http;
mod output;
mod sources;
mod vote;

pub use http::FileHttpConfig;
pub use output::FileOutputConfig;
pub use sources::{FileCatApiConfig, FileDogApiConfig, FileJumbotronConfig};
pub use vote::FileVoteConfig;

use duel_application::SessionConfig;
use duel_domain::{ConfigIssue, ConfigIssueCode, Severity, SourceCatalog};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Cat image API
    pub cat_api: FileCatApiConfig,
    /// Dog image API
    pub dog_api: FileDogApiConfig,
    /// Static text resource
    pub jumbotron: FileJumbotronConfig,
    /// HTTP client settings
    pub http: FileHttpConfig,
    /// Vote timing
    pub vote: FileVoteConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(sources::check_url("cat_api.url", &self.cat_api.url));
        issues.extend(sources::check_url("dog_api.url", &self.dog_api.url));
        if let Some(url) = &self.jumbotron.url {
            issues.extend(sources::check_url("jumbotron.url", url));
        }

        if self.cat_api.api_key().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingApiKey,
                message: "cat_api.api_key is not set; the cat API may refuse requests".to_string(),
            });
        }

        if self.vote.clear_delay_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroClearDelay,
                "vote.clear_delay_ms is 0; the voted picture disappears immediately",
            ));
        }

        issues
    }

    /// Endpoints and credentials for the source catalog
    pub fn to_catalog(&self) -> SourceCatalog {
        let mut catalog = SourceCatalog {
            cat_url: self.cat_api.url.trim().to_string(),
            dog_url: self.dog_api.url.trim().to_string(),
            ..SourceCatalog::default()
        };
        if let Some(key) = self.cat_api.api_key() {
            catalog = catalog.with_cat_api_key(key);
        }
        if let Some(url) = self.jumbotron.url.as_deref().map(str::trim) {
            if !url.is_empty() {
                catalog = catalog.with_text_url(url);
            }
        }
        catalog
    }

    /// Session settings for the trigger controller
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default().with_clear_delay(self.vote.clear_delay())
    }
}
