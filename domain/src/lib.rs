//! Domain layer for pet-duel
//!
//! This crate contains the core entities, value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Pipeline
//!
//! A [`FetchTask`] describes one external resource and how to reduce its
//! response to a renderable fragment (fetch → decode → extract → render).
//!
//! ## Aggregate
//!
//! An [`AggregateResult`] pairs the fragments of two concurrently fetched
//! sources, ordered by source identity.
//!
//! ## Interaction Gate
//!
//! An [`InteractionGate`] keeps a trigger disabled while its request is
//! outstanding.
//!
//! ## Votes
//!
//! A [`VoteTally`] counts per-session votes for each [`Side`].

pub mod config;
pub mod core;
pub mod fetch;
pub mod interaction;
pub mod source;
pub mod vote;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::PipelineError;
pub use fetch::{AggregateResult, Extraction, FetchTask, FragmentTemplate, ImageFragment, Position};
pub use interaction::{
    Control, ControlLabels, ControlView, GateError, GateState, InteractionGate, PendingGuard,
    Settlement, Slot,
};
pub use source::SourceCatalog;
pub use vote::{Side, VoteTally};
