//! Fetch task entity

use super::extraction::Extraction;
use super::fragment::FragmentTemplate;
use crate::core::error::PipelineError;
use std::collections::BTreeMap;

/// One network request plus the transform that turns its response into a
/// display-ready fragment.
///
/// Created per user-triggered action and discarded once its result has
/// been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTask {
    label: String,
    source_url: String,
    headers: BTreeMap<String, String>,
    extraction: Extraction,
    template: FragmentTemplate,
}

impl FetchTask {
    /// Create a task with no extra headers and a verbatim template
    pub fn new(label: impl Into<String>, source_url: impl Into<String>, extraction: Extraction) -> Self {
        Self {
            label: label.into(),
            source_url: source_url.into(),
            headers: BTreeMap::new(),
            extraction,
            template: FragmentTemplate::Verbatim,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_template(mut self, template: FragmentTemplate) -> Self {
        self.template = template;
        self
    }

    /// Short name used in logs, progress and error messages
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    pub fn template(&self) -> &FragmentTemplate {
        &self.template
    }

    /// Decode and extract the payload from a response body
    pub fn extract(&self, content_type: Option<&str>, body: &str) -> Result<String, PipelineError> {
        if !self.extraction.accepts_content_type(content_type) {
            return Err(PipelineError::decode(
                &self.label,
                format!(
                    "unexpected content type `{}`",
                    content_type.unwrap_or_default()
                ),
            ));
        }
        self.extraction.extract(&self.label, body)
    }

    /// Wrap an extracted payload in this task's fragment template
    pub fn render(&self, payload: &str) -> String {
        self.template.render(payload)
    }

    /// The full transform: decode, extract, render
    pub fn transform(&self, content_type: Option<&str>, body: &str) -> Result<String, PipelineError> {
        let payload = self.extract(content_type, body)?;
        Ok(self.render(&payload))
    }
}
