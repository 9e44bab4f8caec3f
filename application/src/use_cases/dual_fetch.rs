//! Dual Fetch use case
//!
//! Runs two pipelines concurrently and delivers both fragments together,
//! ordered by source rather than by completion.

use super::run_pipeline;
use crate::ports::http_fetcher::HttpFetcher;
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use duel_domain::{AggregateResult, FetchTask, PipelineError, Position};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can occur while aggregating two pipelines
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("{position} pipeline failed: {error}")]
    Pipeline {
        position: Position,
        #[source]
        error: PipelineError,
    },

    #[error("Pipeline task failed to complete: {0}")]
    Join(String),
}

impl AggregateError {
    /// The underlying pipeline error, if a pipeline (not the runtime) failed
    pub fn pipeline_error(&self) -> Option<&PipelineError> {
        match self {
            Self::Pipeline { error, .. } => Some(error),
            Self::Join(_) => None,
        }
    }
}

/// Use case joining two concurrently running pipelines
pub struct DualFetchUseCase<F: HttpFetcher + 'static> {
    fetcher: Arc<F>,
}

impl<F: HttpFetcher + 'static> DualFetchUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Execute with default (no-op) progress
    pub async fn execute(
        &self,
        a: FetchTask,
        b: FetchTask,
    ) -> Result<AggregateResult, AggregateError> {
        self.execute_with_progress(a, b, &NoProgress).await
    }

    /// Launch both pipelines, then wait for both.
    ///
    /// The first failure aborts the sibling and fails the whole aggregate;
    /// no partial pair is ever returned.
    pub async fn execute_with_progress(
        &self,
        a: FetchTask,
        b: FetchTask,
        progress: &dyn FetchProgressNotifier,
    ) -> Result<AggregateResult, AggregateError> {
        info!("Starting dual fetch: {} + {}", a.label(), b.label());
        progress.on_batch_start(2);

        let mut join_set = JoinSet::new();

        for (position, task) in [(Position::First, a), (Position::Second, b)] {
            progress.on_fetch_start(task.label());
            let fetcher = Arc::clone(&self.fetcher);

            join_set.spawn(async move {
                let result = run_pipeline::run(fetcher.as_ref(), &task).await;
                (position, task.label().to_string(), result)
            });
        }

        let mut slots: [Option<String>; 2] = [None, None];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((position, label, Ok(fragment))) => {
                    info!("{} pipeline ({}) completed", position, label);
                    progress.on_fetch_complete(&label, true);
                    slots[position.index()] = Some(fragment);
                }
                Ok((position, label, Err(error))) => {
                    warn!("{} pipeline ({}) failed: {}", position, label, error);
                    progress.on_fetch_complete(&label, false);
                    join_set.abort_all();
                    progress.on_batch_complete();
                    return Err(AggregateError::Pipeline { position, error });
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                    join_set.abort_all();
                    progress.on_batch_complete();
                    return Err(AggregateError::Join(e.to_string()));
                }
            }
        }

        progress.on_batch_complete();

        match slots {
            [Some(first), Some(second)] => Ok(AggregateResult::new(first, second)),
            _ => Err(AggregateError::Join(
                "pipeline finished without a result".to_string(),
            )),
        }
    }
}
