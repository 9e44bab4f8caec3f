//! Progress notification port
//!
//! Defines the interface for reporting progress while pipelines run.

/// Callback for progress updates during fetches
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain text, nothing).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called when a group of concurrent fetches starts
    fn on_batch_start(&self, _total: usize) {}

    /// Called when a pipeline starts
    fn on_fetch_start(&self, label: &str);

    /// Called when a pipeline settles
    fn on_fetch_complete(&self, label: &str, success: bool);

    /// Called when every pipeline of a group has settled (or the group failed)
    fn on_batch_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _label: &str) {}
    fn on_fetch_complete(&self, _label: &str, _success: bool) {}
}
