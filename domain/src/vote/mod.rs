//! Voting domain
//!
//! The user picks one picture of a duel; each pick increments that side's
//! counter. Counters live in a [`VoteTally`] owned by a single recorder, so
//! independent vote widgets never share state.

pub mod side;
pub mod tally;

pub use side::{ParseSideError, Side};
pub use tally::VoteTally;
