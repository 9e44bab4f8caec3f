//! Record Vote use case
//!
//! Owns the session tally and the timed clearing of voted pictures.

use crate::ports::display::DisplayPort;
use duel_domain::{Side, VoteTally};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Delay before the voted picture is cleared
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// Outcome of a single vote
#[derive(Debug)]
pub struct VoteReceipt {
    pub side: Side,
    /// New count for `side`
    pub count: u64,
    /// Task clearing `side`'s picture once the delay elapses
    pub clear_task: JoinHandle<()>,
}

/// Per-session vote recorder
///
/// Each instance owns its own tally, so independent recorders never
/// interfere.
pub struct VoteRecorder<D: DisplayPort + 'static> {
    display: Arc<D>,
    tally: Mutex<VoteTally>,
    clear_delay: Duration,
    /// Bumped whenever a new pair is shown; stale clears are skipped
    pair_generation: Arc<AtomicU64>,
}

impl<D: DisplayPort + 'static> VoteRecorder<D> {
    pub fn new(display: Arc<D>) -> Self {
        Self {
            display,
            tally: Mutex::new(VoteTally::default()),
            clear_delay: DEFAULT_CLEAR_DELAY,
            pair_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    /// Snapshot of both counters
    pub fn tally(&self) -> VoteTally {
        *self.tally.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark that a new pair is about to replace the current one.
    ///
    /// Clears still pending for the previous pair leave the new one alone.
    pub fn start_new_pair(&self) {
        self.pair_generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Count a vote for `side`.
    ///
    /// The new score and the removal of the other picture are pushed
    /// immediately; `side`'s own picture is cleared after the delay unless
    /// a new pair has been shown in the meantime.
    /// Calling it twice for the same pair just counts twice.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn record_vote(&self, side: Side) -> VoteReceipt {
        let count = self
            .tally
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(side);
        info!("Vote for {} (now {})", side, count);

        self.display.show_score(side, count);
        self.display.clear(side.other().slot());

        let display = Arc::clone(&self.display);
        let delay = self.clear_delay;
        let generation = Arc::clone(&self.pair_generation);
        let voted_on = generation.load(Ordering::SeqCst);
        let clear_task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) != voted_on {
                debug!("Skipping clear of {}: a new pair is shown", side.slot());
                return;
            }
            debug!("Clearing {} after {:?}", side.slot(), delay);
            display.clear(side.slot());
        });

        VoteReceipt {
            side,
            count,
            clear_task,
        }
    }
}
