//! Source catalog: turns configured endpoints into ready-to-run tasks

use crate::fetch::{Extraction, FetchTask, FragmentTemplate, ImageFragment};

/// Random cat search endpoint (requires an API key header)
pub const CAT_API_URL: &str = "https://api.thecatapi.com/v1/images/search?size=full&mime_types=jpg&format=json&has_breeds=1&order=RANDOM&page=0&limit=1";

/// Random dog endpoint (no headers)
pub const DOG_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Header carrying the cat API key
pub const CAT_API_KEY_HEADER: &str = "x-api-key";

/// Width of the single-cat picture
const SINGLE_CAT_WIDTH: u32 = 500;

/// Endpoints and credentials for every source the app knows about.
///
/// The cat API key is injected from configuration; it is never embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCatalog {
    pub cat_url: String,
    pub cat_api_key: Option<String>,
    pub dog_url: String,
    pub text_url: Option<String>,
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self {
            cat_url: CAT_API_URL.to_string(),
            cat_api_key: None,
            dog_url: DOG_API_URL.to_string(),
            text_url: None,
        }
    }
}

impl SourceCatalog {
    pub fn with_cat_api_key(mut self, key: impl Into<String>) -> Self {
        self.cat_api_key = Some(key.into());
        self
    }

    pub fn with_text_url(mut self, url: impl Into<String>) -> Self {
        self.text_url = Some(url.into());
        self
    }

    fn cat_request(&self, template: FragmentTemplate) -> FetchTask {
        let mut task = FetchTask::new("cat", &self.cat_url, Extraction::FirstElementUrl)
            .with_header("Content-Type", "application/json")
            .with_template(template);
        if let Some(key) = &self.cat_api_key {
            task = task.with_header(CAT_API_KEY_HEADER, key);
        }
        task
    }

    /// Cat picture for the duel (`#catImage`)
    pub fn cat_task(&self) -> FetchTask {
        self.cat_request(FragmentTemplate::Image(ImageFragment::new(
            "catImage",
            "catImage",
            "Cat image",
        )))
    }

    /// Standalone cat picture for the single-cat generator
    pub fn single_cat_task(&self) -> FetchTask {
        self.cat_request(FragmentTemplate::Image(
            ImageFragment::new("catPicture", "catPicture", "Random cat").with_width(SINGLE_CAT_WIDTH),
        ))
    }

    /// Dog picture for the duel (`#dogImage`)
    pub fn dog_task(&self) -> FetchTask {
        FetchTask::new("dog", &self.dog_url, Extraction::MessageField).with_template(
            FragmentTemplate::Image(ImageFragment::new("dogImage", "dogImage", "Dog image")),
        )
    }

    /// Static text resource, inserted verbatim. `None` when not configured.
    pub fn text_task(&self) -> Option<FetchTask> {
        self.text_url
            .as_ref()
            .map(|url| FetchTask::new("jumbotron", url, Extraction::RawText))
    }

    /// Tasks for a duel: dog is source A (position 0), cat is source B
    pub fn duel_tasks(&self) -> (FetchTask, FetchTask) {
        (self.dog_task(), self.cat_task())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_task_headers() {
        let catalog = SourceCatalog::default().with_cat_api_key("k-123");
        let task = catalog.cat_task();
        assert_eq!(task.source_url(), CAT_API_URL);
        assert_eq!(
            task.headers().get(CAT_API_KEY_HEADER).map(String::as_str),
            Some("k-123")
        );
        assert_eq!(
            task.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(task.extraction(), Extraction::FirstElementUrl);
        assert_eq!(task.template().element_id(), Some("catImage"));
    }

    #[test]
    fn test_cat_task_without_key_omits_header() {
        let task = SourceCatalog::default().cat_task();
        assert!(!task.headers().contains_key(CAT_API_KEY_HEADER));
    }

    #[test]
    fn test_dog_task_has_no_headers() {
        let task = SourceCatalog::default().dog_task();
        assert!(task.headers().is_empty());
        assert_eq!(task.extraction(), Extraction::MessageField);
        assert_eq!(task.template().element_id(), Some("dogImage"));
    }

    #[test]
    fn test_duel_order() {
        let (a, b) = SourceCatalog::default().duel_tasks();
        assert_eq!(a.label(), "dog");
        assert_eq!(b.label(), "cat");
    }

    #[test]
    fn test_single_cat_has_width() {
        let html = SourceCatalog::default()
            .single_cat_task()
            .render("http://x/cat.jpg");
        assert!(html.contains(r#"width="500""#));
    }

    #[test]
    fn test_text_task_optional() {
        assert!(SourceCatalog::default().text_task().is_none());
        let task = SourceCatalog::default()
            .with_text_url("http://localhost:8000/jumbotron.html")
            .text_task()
            .unwrap();
        assert_eq!(task.extraction(), Extraction::RawText);
        assert_eq!(task.template(), &FragmentTemplate::Verbatim);
    }
}
