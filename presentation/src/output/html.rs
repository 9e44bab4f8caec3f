//! Terminal rendering of HTML fragments

use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose entire subtree should be ignored
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// An `<img>` found in a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: Option<String>,
}

/// All images in a fragment, in document order
pub fn images(html: &str) -> Vec<ImageRef> {
    let fragment = Html::parse_fragment(html);
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };

    fragment
        .select(&selector)
        .filter_map(|img| {
            let src = img.value().attr("src")?;
            Some(ImageRef {
                src: src.to_string(),
                alt: img
                    .value()
                    .attr("alt")
                    .filter(|alt| !alt.is_empty())
                    .map(str::to_string),
            })
        })
        .collect()
}

/// Readable text of a fragment with markup and scripts removed
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let parts = collect_element_text(fragment.root_element());
    clean_whitespace(&parts.join(" "))
}

fn collect_element_text(element: ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collapse whitespace runs into single spaces
fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
