//! Round lifecycle: state machine and controller.
//!
//! ```text
//! Initial --start_round--> Playing --commit--> Done
//!    ^                        |                  |
//!    +--------reset-----------+------reset-------+
//! ```
//!
//! `start_round` may also be issued from `Playing` or `Done`, which discards
//! the old round.

mod controller;
mod state;

pub use controller::RoundController;
pub use crate::core::RoundPhase;
pub use state::{PlayingRound, RoundOutcome, RoundState};
