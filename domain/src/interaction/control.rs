//! Trigger controls and display slots known to the host

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named trigger control (a button in the host)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Loads a fresh cat-vs-dog pair
    DuelButton,
    /// Generates a single cat picture
    CatButton,
    /// Loads the static text resource (one-shot)
    JumbotronButton,
}

impl Control {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DuelButton => "duel_button",
            Self::CatButton => "cat_button",
            Self::JumbotronButton => "jumbotron_button",
        }
    }

    /// Default labels for this control
    pub fn default_labels(&self) -> ControlLabels {
        match self {
            Self::DuelButton => {
                ControlLabels::new("Cat vs Dog", "Generating images...", "Generate new images")
            }
            Self::CatButton => ControlLabels::new("Generate cat", "Generating cat...", "Generate cat"),
            Self::JumbotronButton => {
                ControlLabels::new("Load jumbotron", "Loading...", "Load jumbotron")
            }
        }
    }

    /// Whether the control disappears after its first successful use
    pub fn is_one_shot(&self) -> bool {
        matches!(self, Self::JumbotronButton)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named region of the host document that receives fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    DogContainer,
    CatContainer,
    CatSingle,
    Jumbotron,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DogContainer => "dog_container",
            Self::CatContainer => "cat_container",
            Self::CatSingle => "cat_single",
            Self::Jumbotron => "jumbotron",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels a control shows across its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLabels {
    /// Shown before the first trigger
    pub initial: String,
    /// Shown while a request is outstanding
    pub pending: String,
    /// Shown after a request has settled
    pub idle: String,
}

impl ControlLabels {
    pub fn new(
        initial: impl Into<String>,
        pending: impl Into<String>,
        idle: impl Into<String>,
    ) -> Self {
        Self {
            initial: initial.into(),
            pending: pending.into(),
            idle: idle.into(),
        }
    }
}

/// What the host should currently show for a control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlView {
    pub label: String,
    /// Whether the control accepts clicks
    pub enabled: bool,
    /// Whether the control is still in the document
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duel_labels() {
        let labels = Control::DuelButton.default_labels();
        assert_eq!(labels.pending, "Generating images...");
        assert_eq!(labels.idle, "Generate new images");
    }

    #[test]
    fn test_one_shot() {
        assert!(Control::JumbotronButton.is_one_shot());
        assert!(!Control::DuelButton.is_one_shot());
        assert!(!Control::CatButton.is_one_shot());
    }

    #[test]
    fn test_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Slot::DogContainer).unwrap(),
            "\"dog_container\""
        );
        assert_eq!(Control::CatButton.to_string(), "cat_button");
    }
}
