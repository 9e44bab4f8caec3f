//! Interaction gate: disable a trigger while its request is outstanding.
//!
//! ```text
//!            try_begin()                 guard released
//!   Idle ───────────────────▶ Pending ───────────────────▶ Idle
//!                                │
//!                                │ success on a one-shot control
//!                                ▼
//!                             Retired
//! ```
//!
//! [`InteractionGate::try_begin`] moves to `Pending` synchronously and hands
//! out a [`PendingGuard`]. The guard moves the gate out of `Pending` exactly
//! once: either through [`PendingGuard::release`] or, if the owning future
//! is dropped or unwinds, through `Drop` (treated as a failure).

use super::control::{Control, ControlLabels, ControlView};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// State of a gated control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Pending,
    /// One-shot control that completed successfully and left the document
    Retired,
}

/// How the gated operation settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Succeeded,
    Failed,
}

/// Reasons a trigger is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    #[error("{0} is disabled while a request is pending")]
    AlreadyPending(Control),

    #[error("{0} has already been used")]
    Retired(Control),
}

#[derive(Debug)]
struct GateInner {
    state: GateState,
    label: String,
    completed_cycles: u64,
}

/// Idle/pending state machine guarding one trigger control
#[derive(Debug)]
pub struct InteractionGate {
    control: Control,
    labels: ControlLabels,
    one_shot: bool,
    inner: Mutex<GateInner>,
}

impl InteractionGate {
    /// Create a gate with the control's default labels
    pub fn new(control: Control) -> Self {
        Self::with_labels(control, control.default_labels())
    }

    pub fn with_labels(control: Control, labels: ControlLabels) -> Self {
        Self {
            control,
            one_shot: control.is_one_shot(),
            inner: Mutex::new(GateInner {
                state: GateState::Idle,
                label: labels.initial.clone(),
                completed_cycles: 0,
            }),
            labels,
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn state(&self) -> GateState {
        self.lock().state
    }

    /// Whether a trigger would currently be accepted
    pub fn is_enabled(&self) -> bool {
        self.state() == GateState::Idle
    }

    pub fn label(&self) -> String {
        self.lock().label.clone()
    }

    /// Number of `Pending → Idle/Retired` transitions so far
    pub fn completed_cycles(&self) -> u64 {
        self.lock().completed_cycles
    }

    /// Snapshot for the host
    pub fn view(&self) -> ControlView {
        let inner = self.lock();
        ControlView {
            label: inner.label.clone(),
            enabled: inner.state == GateState::Idle,
            visible: inner.state != GateState::Retired,
        }
    }

    /// Transition `Idle → Pending`, disabling the control.
    pub fn try_begin(&self) -> Result<PendingGuard<'_>, GateError> {
        let mut inner = self.lock();
        match inner.state {
            GateState::Pending => Err(GateError::AlreadyPending(self.control)),
            GateState::Retired => Err(GateError::Retired(self.control)),
            GateState::Idle => {
                inner.state = GateState::Pending;
                inner.label = self.labels.pending.clone();
                Ok(PendingGuard {
                    gate: self,
                    released: false,
                })
            }
        }
    }

    fn settle(&self, settlement: Settlement) {
        let mut inner = self.lock();
        if inner.state != GateState::Pending {
            return;
        }
        inner.completed_cycles += 1;
        if self.one_shot && settlement == Settlement::Succeeded {
            inner.state = GateState::Retired;
        } else {
            inner.state = GateState::Idle;
            inner.label = self.labels.idle.clone();
        }
    }
}

/// Proof that a gate is `Pending`; releasing it re-enables the control.
#[must_use = "dropping the guard immediately re-enables the control"]
#[derive(Debug)]
pub struct PendingGuard<'a> {
    gate: &'a InteractionGate,
    released: bool,
}

impl PendingGuard<'_> {
    /// Settle the gated operation and leave `Pending`
    pub fn release(mut self, settlement: Settlement) {
        self.released = true;
        self.gate.settle(settlement);
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.gate.settle(Settlement::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let gate = InteractionGate::new(Control::DuelButton);
        assert_eq!(gate.state(), GateState::Idle);
        assert!(gate.is_enabled());
        assert_eq!(gate.label(), "Cat vs Dog");
        assert_eq!(gate.completed_cycles(), 0);
    }

    #[test]
    fn test_begin_disables_synchronously() {
        let gate = InteractionGate::new(Control::DuelButton);
        let guard = gate.try_begin().unwrap();
        assert_eq!(gate.state(), GateState::Pending);
        let view = gate.view();
        assert!(!view.enabled);
        assert!(view.visible);
        assert_eq!(view.label, "Generating images...");
        guard.release(Settlement::Succeeded);
    }

    #[test]
    fn test_reentrant_trigger_refused() {
        let gate = InteractionGate::new(Control::CatButton);
        let _guard = gate.try_begin().unwrap();
        assert_eq!(
            gate.try_begin().unwrap_err(),
            GateError::AlreadyPending(Control::CatButton)
        );
    }

    #[test]
    fn test_release_returns_to_idle_once() {
        let gate = InteractionGate::new(Control::DuelButton);
        gate.try_begin().unwrap().release(Settlement::Succeeded);
        assert_eq!(gate.state(), GateState::Idle);
        assert_eq!(gate.label(), "Generate new images");
        assert_eq!(gate.completed_cycles(), 1);
    }

    #[test]
    fn test_failure_also_returns_to_idle() {
        let gate = InteractionGate::new(Control::DuelButton);
        gate.try_begin().unwrap().release(Settlement::Failed);
        assert!(gate.is_enabled());
        assert_eq!(gate.completed_cycles(), 1);
    }

    #[test]
    fn test_dropped_guard_releases() {
        let gate = InteractionGate::new(Control::CatButton);
        {
            let _guard = gate.try_begin().unwrap();
        }
        assert!(gate.is_enabled());
        assert_eq!(gate.completed_cycles(), 1);
    }

    #[test]
    fn test_one_shot_retires_on_success() {
        let gate = InteractionGate::new(Control::JumbotronButton);
        gate.try_begin().unwrap().release(Settlement::Succeeded);
        assert_eq!(gate.state(), GateState::Retired);
        assert!(!gate.view().visible);
        assert_eq!(
            gate.try_begin().unwrap_err(),
            GateError::Retired(Control::JumbotronButton)
        );
    }

    #[test]
    fn test_one_shot_failure_allows_retry() {
        let gate = InteractionGate::new(Control::JumbotronButton);
        gate.try_begin().unwrap().release(Settlement::Failed);
        assert!(gate.is_enabled());
        assert!(gate.try_begin().is_ok());
    }

    #[test]
    fn test_many_cycles() {
        let gate = InteractionGate::new(Control::DuelButton);
        for _ in 0..3 {
            gate.try_begin().unwrap().release(Settlement::Succeeded);
        }
        assert_eq!(gate.completed_cycles(), 3);
    }
}
