//! Ubuntu community helper game
//!
//! Learners face community scenarios and choose to help, share or teach.
//! The score is an explicit value passed into and returned from each
//! round; nothing here keeps global state or touches hardware.

pub mod scenario;
pub mod score;
pub mod sounds;

pub use scenario::{Choice, Outcome, Scenario, SCENARIOS};
pub use score::{play_round, Feedback, Rank, RoundReport, UbuntuScore};
