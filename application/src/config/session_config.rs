//! Session configuration: labels and timing for a running session.

use crate::use_cases::record_vote::DEFAULT_CLEAR_DELAY;
use duel_domain::{Control, ControlLabels};
use std::time::Duration;

/// Settings consumed by [`TriggerController`](crate::TriggerController)
///
/// Built by the infrastructure layer from file configuration; defaults
/// match the built-in control labels and a 2 second clear delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long the voted picture stays visible
    pub clear_delay: Duration,
    pub duel_labels: ControlLabels,
    pub cat_labels: ControlLabels,
    pub text_labels: ControlLabels,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_delay: DEFAULT_CLEAR_DELAY,
            duel_labels: Control::DuelButton.default_labels(),
            cat_labels: Control::CatButton.default_labels(),
            text_labels: Control::JumbotronButton.default_labels(),
        }
    }
}

impl SessionConfig {
    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    pub fn with_labels(mut self, control: Control, labels: ControlLabels) -> Self {
        match control {
            Control::DuelButton => self.duel_labels = labels,
            Control::CatButton => self.cat_labels = labels,
            Control::JumbotronButton => self.text_labels = labels,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(
            SessionConfig::default().clear_delay,
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_with_labels() {
        let labels = ControlLabels::new("Go", "Going...", "Again");
        let config = SessionConfig::default().with_labels(Control::CatButton, labels.clone());
        assert_eq!(config.cat_labels, labels);
        assert_eq!(config.duel_labels, Control::DuelButton.default_labels());
    }
}
