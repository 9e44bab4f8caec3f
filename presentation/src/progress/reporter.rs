//! Progress reporting for in-flight fetches

use colored::Colorize;
use duel_application::FetchProgressNotifier;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Reports progress with one spinner per running pipeline
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn in_flight(&self) -> usize {
        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, label: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(label.to_string());
        pb.set_message("fetching...");
        pb.enable_steady_tick(Duration::from_millis(100));

        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(label.to_string(), pb);
    }

    fn on_fetch_complete(&self, label: &str, success: bool) {
        let pb = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(label);
        if let Some(pb) = pb {
            let status = if success {
                format!("{} done", "v".green())
            } else {
                format!("{} failed", "x".red())
            };
            pb.finish_with_message(status);
        }
    }

    fn on_batch_complete(&self) {
        // Siblings aborted after a failure never report completion
        let remaining: Vec<ProgressBar> = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, pb)| pb)
            .collect();
        for pb in remaining {
            pb.finish_and_clear();
        }
    }
}
