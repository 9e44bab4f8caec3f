//! Infrastructure layer for pet-duel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileOutputConfig};
pub use http::{DEFAULT_USER_AGENT, ReqwestFetcher};
