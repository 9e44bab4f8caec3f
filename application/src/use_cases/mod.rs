//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dual_fetch;
pub mod record_vote;
pub mod run_pipeline;
pub mod trigger;
