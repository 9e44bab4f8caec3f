//! reqwest-backed implementation of [`HttpFetcher`]

use async_trait::async_trait;
use duel_application::ports::http_fetcher::{FetchError, FetchedBody, HttpFetcher};
use reqwest::header::CONTENT_TYPE;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("pet-duel/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter over a shared [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestFetcher {
    /// Build a fetcher with the default user agent and no timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    pub fn builder() -> ReqwestFetcherBuilder {
        ReqwestFetcherBuilder::default()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for [`ReqwestFetcher`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcherBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ReqwestFetcherBuilder {
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Transport timeout for the whole request. Unset means none.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ReqwestFetcher, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(ReqwestFetcher {
            client,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<FetchedBody, FetchError> {
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        debug!("GET {} -> {} ({} bytes)", url, status.as_u16(), body.len());
        Ok(FetchedBody::new(status.as_u16(), content_type, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let fetcher = ReqwestFetcher::new().unwrap();
        assert!(fetcher.user_agent().starts_with("pet-duel/"));
    }

    #[test]
    fn test_custom_user_agent() {
        let fetcher = ReqwestFetcher::builder()
            .user_agent("duel-test/1")
            .timeout(Some(Duration::from_secs(5)))
            .build()
            .unwrap();
        assert_eq!(fetcher.user_agent(), "duel-test/1");
    }
}
