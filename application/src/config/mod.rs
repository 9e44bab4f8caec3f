//! Application-level configuration.
//!
//! - [`SessionConfig`] - control labels and vote timing for a session

pub mod session_config;

pub use session_config::SessionConfig;
