//! Terminal host for the duel
//!
//! Prints every render / clear / score event as it happens and remembers
//! the current slot contents and control states so the interactive
//! session can show them on demand.

use crate::output::console::ConsoleFormatter;
use duel_application::DisplayPort;
use duel_domain::{Control, ControlView, OutputFormat, Side, Slot};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// [`DisplayPort`] that writes to a terminal (or any writer)
pub struct ConsoleDisplay {
    format: OutputFormat,
    out: Mutex<Box<dyn Write + Send>>,
    slots: Mutex<HashMap<Slot, String>>,
    controls: Mutex<HashMap<Control, ControlView>>,
}

impl ConsoleDisplay {
    /// Display writing to stdout
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writer(format, Box::new(io::stdout()))
    }

    pub fn with_writer(format: OutputFormat, out: Box<dyn Write + Send>) -> Self {
        Self {
            format,
            out: Mutex::new(out),
            slots: Mutex::new(HashMap::new()),
            controls: Mutex::new(HashMap::new()),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Current contents of `slot`, `None` when empty
    pub fn slot(&self, slot: Slot) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&slot)
            .cloned()
    }

    /// Last state reported for `control`
    pub fn control_view(&self, control: Control) -> Option<ControlView> {
        self.controls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&control)
            .cloned()
    }

    fn emit(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // The port has no error channel
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl DisplayPort for ConsoleDisplay {
    fn render(&self, slot: Slot, html: &str) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot, html.to_string());
        self.emit(&ConsoleFormatter::format_render(slot, html, self.format));
    }

    fn clear(&self, slot: Slot) {
        let removed = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&slot);
        if removed.is_none() {
            return;
        }
        if let Some(line) = ConsoleFormatter::format_clear(slot, self.format) {
            self.emit(&line);
        }
    }

    fn show_score(&self, side: Side, count: u64) {
        self.emit(&ConsoleFormatter::format_score(side, count, self.format));
    }

    fn update_control(&self, control: Control, view: &ControlView) {
        self.controls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(control, view.clone());
        if let Some(line) = ConsoleFormatter::format_control(control, view, self.format) {
            self.emit(&line);
        }
    }
}
