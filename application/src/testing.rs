//! In-memory port implementations shared by the use case tests

use crate::ports::display::DisplayPort;
use crate::ports::http_fetcher::{FetchError, FetchedBody, HttpFetcher};
use crate::ports::progress::FetchProgressNotifier;
use async_trait::async_trait;
use duel_domain::{Control, ControlView, Side, Slot};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::time::Duration;

struct Canned {
    delay: Duration,
    result: Result<FetchedBody, FetchError>,
}

/// Fetcher answering from a per-URL table, optionally after a delay
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<(String, BTreeMap<String, String>)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, body: FetchedBody) -> Self {
        self.respond_after(url, Duration::ZERO, body)
    }

    pub fn respond_after(mut self, url: &str, delay: Duration, body: FetchedBody) -> Self {
        self.responses.insert(
            url.to_string(),
            Canned {
                delay,
                result: Ok(body),
            },
        );
        self
    }

    pub fn fail(self, url: &str, error: FetchError) -> Self {
        self.fail_after(url, Duration::ZERO, error)
    }

    pub fn fail_after(mut self, url: &str, delay: Duration, error: FetchError) -> Self {
        self.responses.insert(
            url.to_string(),
            Canned {
                delay,
                result: Err(error),
            },
        );
        self
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| u == url)
            .count()
    }

    pub fn last_headers(&self, url: &str) -> Option<BTreeMap<String, String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(u, _)| u == url)
            .map(|(_, h)| h.clone())
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
    ) -> Result<FetchedBody, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), headers.clone()));

        let Some(canned) = self.responses.get(url) else {
            return Err(FetchError::Transport(format!("no route to {}", url)));
        };
        if !canned.delay.is_zero() {
            tokio::time::sleep(canned.delay).await;
        }
        canned.result.clone()
    }
}

/// Progress notifier that records events as short strings
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl FetchProgressNotifier for RecordingProgress {
    fn on_batch_start(&self, total: usize) {
        self.events.lock().unwrap().push(format!("batch {}", total));
    }

    fn on_fetch_start(&self, label: &str) {
        self.events.lock().unwrap().push(format!("start {}", label));
    }

    fn on_fetch_complete(&self, label: &str, success: bool) {
        let verb = if success { "done" } else { "fail" };
        self.events.lock().unwrap().push(format!("{} {}", verb, label));
    }

    fn on_batch_complete(&self) {
        self.events.lock().unwrap().push("batch done".to_string());
    }
}

/// Display that keeps the latest state of every slot, score and control
#[derive(Default)]
pub struct RecordingDisplay {
    slots: Mutex<HashMap<Slot, String>>,
    scores: Mutex<HashMap<Side, u64>>,
    controls: Mutex<Vec<(Control, ControlView)>>,
}

impl RecordingDisplay {
    /// Current contents of `slot` (`None` when empty or never rendered)
    pub fn slot(&self, slot: Slot) -> Option<String> {
        self.slots
            .lock()
            .unwrap()
            .get(&slot)
            .filter(|html| !html.is_empty())
            .cloned()
    }

    pub fn score(&self, side: Side) -> Option<u64> {
        self.scores.lock().unwrap().get(&side).copied()
    }

    /// Every view pushed for `control`, in order
    pub fn control_history(&self, control: Control) -> Vec<ControlView> {
        self.controls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == control)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl DisplayPort for RecordingDisplay {
    fn render(&self, slot: Slot, html: &str) {
        self.slots.lock().unwrap().insert(slot, html.to_string());
    }

    fn clear(&self, slot: Slot) {
        self.slots.lock().unwrap().insert(slot, String::new());
    }

    fn show_score(&self, side: Side, count: u64) {
        self.scores.lock().unwrap().insert(side, count);
    }

    fn update_control(&self, control: Control, view: &ControlView) {
        self.controls.lock().unwrap().push((control, view.clone()));
    }
}
