//! Output format value object

use serde::{Deserialize, Serialize};

/// How results are printed by the terminal host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable rendering of each slot (default)
    #[default]
    Full,
    /// Raw HTML fragments, one per line
    Fragments,
    /// JSON output
    Json,
}
