//! Presentation layer for pet-duel
//!
//! This crate contains CLI definitions, the terminal display adapter,
//! output formatters, progress reporters, and the interactive session.

pub mod cli;
pub mod display;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, VoteArg};
pub use display::ConsoleDisplay;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use session::{DuelRepl, ReplCommand};
