//! HTTP fetcher port
//!
//! Defines how the application layer issues outbound GET requests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while fetching a resource
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// A successfully received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub status: u16,
    /// Declared `Content-Type`, if any
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchedBody {
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// 200 response with a JSON content type
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(200, Some("application/json".to_string()), body)
    }

    /// 200 response with an HTML content type
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(200, Some("text/html; charset=utf-8".to_string()), body)
    }
}

/// Outbound HTTP GET
///
/// Implementations (adapters) live in the infrastructure layer. A non-2xx
/// status must be reported as [`FetchError::Status`].
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<FetchedBody, FetchError>;
}
