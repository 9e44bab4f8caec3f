//! Configuration file loading for pet-duel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `PET_DUEL_*`
//! 2. `--config <path>` specified file
//! 3. Project root: `./pet-duel.toml` or `./.pet-duel.toml`
//! 4. Global: `~/.config/pet-duel/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileCatApiConfig, FileConfig, FileDogApiConfig, FileHttpConfig, FileJumbotronConfig,
    FileOutputConfig, FileVoteConfig,
};
pub use loader::ConfigLoader;
