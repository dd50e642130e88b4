//! Core types: tiles, tokens, phases, RNG, configuration, errors.
//!
//! Everything the generator, evaluator and controller share lives here.

pub mod tile;
pub mod token;
pub mod phase;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{Tile, TileId};
pub use token::{format_tokens, Operator, Token};
pub use phase::RoundPhase;
pub use rng::{RoundRng, RoundRngState};
pub use config::{OperandCheck, RoundConfig, LARGE_POOL, TILE_COUNT};
pub use error::{Command, Result, RoundError};
