//! Domain error types

use thiserror::Error;

/// Why a single fetch pipeline failed.
///
/// Every step of a pipeline (fetch, decode, extract) reports into this one
/// taxonomy so callers can treat a pipeline failure as a single outcome.
/// `origin` carries the task label (e.g. "cat", "dog").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The request could not be completed (connectivity, DNS, transport
    /// timeout, or a non-success HTTP status).
    #[error("Network failure ({origin}): {message}")]
    Network { origin: String, message: String },

    /// The body could not be parsed as expected (malformed JSON, wrong
    /// content type).
    #[error("Decode failure ({origin}): {message}")]
    Decode { origin: String, message: String },

    /// The body parsed but lacks the expected field.
    #[error("Shape failure ({origin}): {message}")]
    Shape { origin: String, message: String },
}

impl PipelineError {
    pub fn network(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            origin: origin.into(),
            message: message.into(),
        }
    }

    pub fn decode(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            origin: origin.into(),
            message: message.into(),
        }
    }

    pub fn shape(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Label of the task that failed
    pub fn origin(&self) -> &str {
        match self {
            Self::Network { origin, .. } | Self::Decode { origin, .. } | Self::Shape { origin, .. } => {
                origin
            }
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}
