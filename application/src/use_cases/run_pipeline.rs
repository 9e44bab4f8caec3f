//! Run Pipeline use case
//!
//! Fetches one resource and reduces it to a displayable fragment.

use crate::ports::http_fetcher::HttpFetcher;
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use duel_domain::{FetchTask, PipelineError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for running a single fetch pipeline
pub struct RunPipelineUseCase<F: HttpFetcher + 'static> {
    fetcher: Arc<F>,
}

impl<F: HttpFetcher + 'static> RunPipelineUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Execute the pipeline with default (no-op) progress
    pub async fn execute(&self, task: &FetchTask) -> Result<String, PipelineError> {
        self.execute_with_progress(task, &NoProgress).await
    }

    /// Execute the pipeline with progress callbacks
    pub async fn execute_with_progress(
        &self,
        task: &FetchTask,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<String, PipelineError> {
        progress.on_fetch_start(task.label());
        let result = run(self.fetcher.as_ref(), task).await;
        progress.on_fetch_complete(task.label(), result.is_ok());
        result
    }
}

/// fetch → decode → extract → render
pub(crate) async fn run<F: HttpFetcher + ?Sized>(
    fetcher: &F,
    task: &FetchTask,
) -> Result<String, PipelineError> {
    info!("Fetching {} from {}", task.label(), task.source_url());

    let response = fetcher
        .get(task.source_url(), task.headers())
        .await
        .map_err(|e| {
            warn!("{} fetch failed: {}", task.label(), e);
            PipelineError::network(task.label(), e.to_string())
        })?;
    debug!(
        "{} responded {} ({} bytes, content-type {:?})",
        task.label(),
        response.status,
        response.body.len(),
        response.content_type
    );

    let payload = task
        .extract(response.content_type.as_deref(), &response.body)
        .inspect_err(|e| warn!("{}", e))?;
    debug!("{} payload: {}", task.label(), payload);

    Ok(task.render(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::http_fetcher::{FetchError, FetchedBody};
    use crate::testing::{MockFetcher, RecordingProgress};
    use duel_domain::SourceCatalog;

    const CAT_URL: &str = "http://cat.test/search";
    const DOG_URL: &str = "http://dog.test/random";

    fn catalog() -> SourceCatalog {
        SourceCatalog {
            cat_url: CAT_URL.to_string(),
            cat_api_key: Some("test-key".to_string()),
            dog_url: DOG_URL.to_string(),
            text_url: Some("http://text.test/jumbotron.html".to_string()),
        }
    }

    #[tokio::test]
    async fn test_cat_pipeline_renders_image() {
        let fetcher = MockFetcher::new()
            .respond(CAT_URL, FetchedBody::json(r#"[{"url":"http://x/cat.jpg"}]"#));
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let html = use_case.execute(&catalog().cat_task()).await.unwrap();
        assert_eq!(
            html,
            r#"<img class="catImage" id="catImage" src="http://x/cat.jpg" alt="Cat image">"#
        );
    }

    #[tokio::test]
    async fn test_cat_pipeline_sends_api_key() {
        let fetcher = Arc::new(
            MockFetcher::new().respond(CAT_URL, FetchedBody::json(r#"[{"url":"http://x"}]"#)),
        );
        let use_case = RunPipelineUseCase::new(Arc::clone(&fetcher));
        use_case.execute(&catalog().cat_task()).await.unwrap();

        let headers = fetcher.last_headers(CAT_URL).unwrap();
        assert_eq!(headers.get("x-api-key").map(String::as_str), Some("test-key"));
    }

    #[tokio::test]
    async fn test_dog_pipeline_renders_image() {
        let fetcher = MockFetcher::new().respond(
            DOG_URL,
            FetchedBody::json(r#"{"message":"http://x/dog.jpg","status":"success"}"#),
        );
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let html = use_case.execute(&catalog().dog_task()).await.unwrap();
        assert!(html.contains(r#"src="http://x/dog.jpg""#));
        assert!(html.contains(r#"id="dogImage""#));
    }

    #[tokio::test]
    async fn test_text_pipeline_is_verbatim() {
        let body = "<div class=\"jumbotron\"><h1>Hello</h1></div>";
        let fetcher =
            MockFetcher::new().respond("http://text.test/jumbotron.html", FetchedBody::html(body));
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let task = catalog().text_task().unwrap();
        assert_eq!(use_case.execute(&task).await.unwrap(), body);
    }

    #[tokio::test]
    async fn test_network_failure() {
        let fetcher = MockFetcher::new().fail(DOG_URL, FetchError::Transport("refused".into()));
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let err = use_case.execute(&catalog().dog_task()).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.origin(), "dog");
    }

    #[tokio::test]
    async fn test_http_status_is_network_failure() {
        let fetcher = MockFetcher::new().fail(
            CAT_URL,
            FetchError::Status {
                code: 401,
                reason: "Unauthorized".into(),
            },
        );
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let err = use_case.execute(&catalog().cat_task()).await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let fetcher = MockFetcher::new().respond(DOG_URL, FetchedBody::json("not json"));
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let err = use_case.execute(&catalog().dog_task()).await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_empty_cat_array_is_shape_failure() {
        let fetcher = MockFetcher::new().respond(CAT_URL, FetchedBody::json("[]"));
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));

        let err = use_case.execute(&catalog().cat_task()).await.unwrap_err();
        assert!(err.is_shape());
    }

    #[tokio::test]
    async fn test_progress_reports_outcome() {
        let fetcher = MockFetcher::new().respond(DOG_URL, FetchedBody::json("{}"));
        let use_case = RunPipelineUseCase::new(Arc::new(fetcher));
        let progress = RecordingProgress::default();

        let _ = use_case
            .execute_with_progress(&catalog().dog_task(), &progress)
            .await;
        assert_eq!(
            progress.events(),
            vec!["start dog".to_string(), "fail dog".to_string()]
        );
    }
}
