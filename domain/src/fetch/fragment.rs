//! Renderable fragments
//!
//! The last step of a pipeline wraps the extracted payload in a fragment
//! the host can insert into its document.

use crate::core::string::escape_attribute;
use serde::{Deserialize, Serialize};

/// An `<img>` reference tagged with a stable identifier, so the host can
/// bind click handlers to it after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFragment {
    /// Element id (e.g. "dogImage")
    pub element_id: String,
    /// CSS class
    pub class: String,
    /// Alternative text
    pub alt: String,
    /// Fixed width in pixels, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl ImageFragment {
    pub fn new(
        element_id: impl Into<String>,
        class: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            class: class.into(),
            alt: alt.into(),
            width: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Render an `<img>` tag pointing at `src`
    pub fn render(&self, src: &str) -> String {
        let width = self
            .width
            .map(|w| format!(" width=\"{}\"", w))
            .unwrap_or_default();
        format!(
            r#"<img class="{}" id="{}"{} src="{}" alt="{}">"#,
            escape_attribute(&self.class),
            escape_attribute(&self.element_id),
            width,
            escape_attribute(src),
            escape_attribute(&self.alt),
        )
    }
}

/// How a pipeline turns its extracted payload into a fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FragmentTemplate {
    /// Wrap the payload (an image URL) in an `<img>` tag
    Image(ImageFragment),
    /// Pass the payload through unchanged
    Verbatim,
}

impl FragmentTemplate {
    pub fn render(&self, payload: &str) -> String {
        match self {
            Self::Image(image) => image.render(payload),
            Self::Verbatim => payload.to_string(),
        }
    }

    /// Element id of the rendered fragment, if it has one
    pub fn element_id(&self) -> Option<&str> {
        match self {
            Self::Image(image) => Some(&image.element_id),
            Self::Verbatim => None,
        }
    }
}
