//! Fetch pipeline domain
//!
//! A pipeline is a sequential chain for one external resource:
//!
//! ```text
//! fetch ──▶ decode ──▶ extract ──▶ render
//!  (port)    └── Extraction ──┘    FragmentTemplate
//! ```
//!
//! The network step lives behind a port in the application layer; everything
//! after it is pure and lives here on [`FetchTask`].

pub mod aggregate;
pub mod extraction;
pub mod fragment;
pub mod task;

pub use aggregate::{AggregateResult, Position};
pub use extraction::Extraction;
pub use fragment::{FragmentTemplate, ImageFragment};
pub use task::FetchTask;
