//! Display port
//!
//! The host document (a browser page, a terminal, a test recorder) is an
//! external collaborator. The application pushes fragments, scores and
//! control states through this port and never reads them back.

use duel_domain::{Control, ControlView, Side, Slot};

/// Rendering boundary of the host
pub trait DisplayPort: Send + Sync {
    /// Replace the contents of `slot` with `html`
    fn render(&self, slot: Slot, html: &str);

    /// Empty `slot`
    fn clear(&self, slot: Slot);

    /// Show the current vote count for `side`
    fn show_score(&self, side: Side, count: u64);

    /// Reflect a control's label / enabled / visible state
    fn update_control(&self, control: Control, view: &ControlView);
}
