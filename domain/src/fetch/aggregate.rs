//! Aggregate of two concurrently fetched results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a source inside an [`AggregateResult`].
///
/// Positions follow source identity (A is always first), never completion
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    First,
    Second,
}

impl Position {
    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered pair of transformed payloads from sources A and B.
///
/// Only ever constructed once both pipelines have succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    first: String,
    second: String,
}

impl AggregateResult {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Result of source A
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Result of source B
    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn get(&self, position: Position) -> &str {
        match position {
            Position::First => &self.first,
            Position::Second => &self.second,
        }
    }

    pub fn into_pair(self) -> (String, String) {
        (self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let result = AggregateResult::new("dog", "cat");
        assert_eq!(result.get(Position::First), "dog");
        assert_eq!(result.get(Position::Second), "cat");
        assert_eq!(Position::First.index(), 0);
        assert_eq!(Position::Second.index(), 1);
        assert_eq!(result.into_pair(), ("dog".to_string(), "cat".to_string()));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Second.to_string(), "second");
    }
}
