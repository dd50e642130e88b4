//! Error types for round commands.
//!
//! Every rejected command leaves the round untouched. Operator underflow
//! during evaluation is not represented here; the expression engine absorbs it.

use thiserror::Error;

use super::phase::RoundPhase;
use super::tile::TileId;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, RoundError>;

/// Commands accepted by the round controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    StartRound,
    AppendToken,
    RemoveLastToken,
    Commit,
    Reset,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::StartRound => "start_round",
            Command::AppendToken => "append_token",
            Command::RemoveLastToken => "remove_last_token",
            Command::Commit => "commit",
            Command::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by round commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    #[error("`{command}` is not allowed while the round is {phase}")]
    InvalidTransition { command: Command, phase: RoundPhase },
    #[error("{0} has already been used this round")]
    DuplicateTileUse(TileId),
    #[error("{0} is not part of the current round")]
    UnknownTile(TileId),
    #[error("cannot deal {requested} large tiles (at most {max})")]
    InvalidLargeCount { requested: usize, max: usize },
    #[error("invalid round configuration: {0}")]
    InvalidConfig(String),
    #[error("setup cannot be dealt from this configuration: {0}")]
    InvalidSetup(String),
    #[error("unrecognised token `{0}`")]
    ParseToken(String),
}
