//! Interactive session
//!
//! Provides a line-editor driven duel session.

mod repl;

pub use repl::{DuelRepl, ReplCommand};
