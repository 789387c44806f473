//! State machine for the interactive mapping session
//!
//! The console (or a button-and-display front end) feeds events in and
//! acts on the resulting state. Transitions are explicit, finite and
//! deterministic.

pub mod events;
pub mod machine;

pub use events::{Event, MenuChoice};
pub use machine::{State, MIN_SPACES_TO_MEASURE};
