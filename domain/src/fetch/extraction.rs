//! Source-specific extraction strategies
//!
//! The image services return differently shaped bodies. Rather than
//! scattering field paths across call sites, each source picks one
//! [`Extraction`] from this closed set.

use crate::core::error::PipelineError;
use crate::core::string::truncate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest body preview included in a decode error message
const BODY_PREVIEW_LEN: usize = 120;

/// How to reduce a response body to a single string payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extraction {
    /// JSON array whose first element carries a `url` string
    /// (e.g. `[{"url": "..."}]`)
    FirstElementUrl,
    /// JSON object with a `message` string (e.g. `{"message": "..."}`)
    MessageField,
    /// Body used verbatim
    RawText,
}

impl Extraction {
    /// Whether this strategy decodes JSON
    pub fn expects_json(&self) -> bool {
        !matches!(self, Self::RawText)
    }

    /// Check a declared `Content-Type` against what this strategy can decode.
    ///
    /// A missing content type is accepted. JSON strategies accept any
    /// `*json*` type and `text/plain` (some services mislabel JSON).
    pub fn accepts_content_type(&self, content_type: Option<&str>) -> bool {
        if !self.expects_json() {
            return true;
        }
        match content_type {
            None => true,
            Some(ct) => {
                let ct = ct.to_ascii_lowercase();
                ct.contains("json") || ct.starts_with("text/plain")
            }
        }
    }

    /// Extract the payload from a raw response body.
    ///
    /// `origin` labels errors with the task they came from.
    pub fn extract(&self, origin: &str, body: &str) -> Result<String, PipelineError> {
        match self {
            Self::RawText => Ok(body.to_string()),
            Self::FirstElementUrl => {
                let value = parse_json(origin, body)?;
                let items = value.as_array().ok_or_else(|| {
                    PipelineError::shape(origin, "expected a JSON array of results")
                })?;
                let first = items
                    .first()
                    .ok_or_else(|| PipelineError::shape(origin, "empty result array"))?;
                string_field(origin, first, "url")
            }
            Self::MessageField => {
                let value = parse_json(origin, body)?;
                if !value.is_object() {
                    return Err(PipelineError::shape(origin, "expected a JSON object"));
                }
                string_field(origin, &value, "message")
            }
        }
    }
}

fn parse_json(origin: &str, body: &str) -> Result<Value, PipelineError> {
    serde_json::from_str(body).map_err(|e| {
        PipelineError::decode(
            origin,
            format!("invalid JSON ({}): {}", e, truncate(body, BODY_PREVIEW_LEN)),
        )
    })
}

fn string_field(origin: &str, value: &Value, field: &str) -> Result<String, PipelineError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(PipelineError::shape(
            origin,
            format!("field `{}` is not a string", field),
        )),
        None => Err(PipelineError::shape(
            origin,
            format!("missing field `{}`", field),
        )),
    }
}
