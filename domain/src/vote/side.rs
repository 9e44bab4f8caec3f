//! The two sides of a duel

use crate::interaction::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which picture a vote goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Dog,
    Cat,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Self::Dog => Self::Cat,
            Self::Cat => Self::Dog,
        }
    }

    /// Slot holding this side's picture during a duel
    pub fn slot(&self) -> Slot {
        match self {
            Self::Dog => Slot::DogContainer,
            Self::Cat => Slot::CatContainer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown side `{0}` (expected `dog` or `cat`)")]
pub struct ParseSideError(String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" | "d" => Ok(Self::Dog),
            "cat" | "c" => Ok(Self::Cat),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}
