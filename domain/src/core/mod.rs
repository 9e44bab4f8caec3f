//! Core domain concepts shared across all subdomains.
//!
//! - [`error::PipelineError`] - the failure taxonomy of a fetch pipeline
//! - [`string`] - small string helpers (previews, attribute escaping)

pub mod error;
pub mod string;
