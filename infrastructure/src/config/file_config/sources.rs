//! Source endpoints from TOML (`[cat_api]`, `[dog_api]`, `[jumbotron]`)

use duel_domain::source::{CAT_API_URL, DOG_API_URL};
use duel_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// `[cat_api]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatApiConfig {
    pub url: String,
    /// Sent as the `x-api-key` header
    pub api_key: Option<String>,
}

impl Default for FileCatApiConfig {
    fn default() -> Self {
        Self {
            url: CAT_API_URL.to_string(),
            api_key: None,
        }
    }
}

impl FileCatApiConfig {
    /// The key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// `[dog_api]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDogApiConfig {
    pub url: String,
}

impl Default for FileDogApiConfig {
    fn default() -> Self {
        Self {
            url: DOG_API_URL.to_string(),
        }
    }
}

/// `[jumbotron]` section. No default host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJumbotronConfig {
    pub url: Option<String>,
}

/// Check that a configured URL is non-empty and uses http(s)
pub(super) fn check_url(field: &str, url: &str) -> Option<ConfigIssue> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Some(ConfigIssue::error(
            ConfigIssueCode::EmptyUrl {
                field: field.to_string(),
            },
            format!("{}: URL must not be empty", field),
        ));
    }

    let lower = trimmed.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Some(ConfigIssue::error(
            ConfigIssueCode::UnsupportedScheme {
                field: field.to_string(),
                value: trimmed.to_string(),
            },
            format!("{}: '{}' is not an http or https URL", field, trimmed),
        ));
    }

    None
}
