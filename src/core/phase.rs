//! Round phases.

use serde::{Deserialize, Serialize};

/// Fieldless view of a state, for diagnostics and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    Initial,
    Playing,
    Done,
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundPhase::Initial => "initial",
            RoundPhase::Playing => "playing",
            RoundPhase::Done => "done",
        };
        f.write_str(name)
    }
}
