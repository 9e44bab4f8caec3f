//! Application layer for pet-duel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    display::DisplayPort,
    http_fetcher::{FetchError, FetchedBody, HttpFetcher},
    progress::{FetchProgressNotifier, NoProgress},
};
pub use use_cases::dual_fetch::{AggregateError, DualFetchUseCase};
pub use use_cases::record_vote::{DEFAULT_CLEAR_DELAY, VoteReceipt, VoteRecorder};
pub use use_cases::run_pipeline::RunPipelineUseCase;
pub use use_cases::trigger::{TriggerController, TriggerError};
