//! Interaction domain: controls, slots and the gate that guards triggers.

pub mod control;
pub mod gate;

pub use control::{Control, ControlLabels, ControlView, Slot};
pub use gate::{GateError, GateState, InteractionGate, PendingGuard, Settlement};
