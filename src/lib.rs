//! # numbers-round
//!
//! Game-state engine for the numbers round: reach a three-digit target by
//! combining six dealt tiles with `+ - * /`, entered in postfix order.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: A round lives in a `RoundController` instance.
//!    There is no global state; independent rounds coexist freely.
//!
//! 2. **Derived values are recomputed**: Every mutating command re-folds the
//!    token stream. The evaluator is pure and holds no state between calls.
//!
//! 3. **Injected randomness**: Dealing draws from a seeded `RoundRng`, so any
//!    round can be reproduced from its seed.
//!
//! ## Modules
//!
//! - `core`: Tiles, tokens, phases, RNG, configuration, errors
//! - `pool`: Tile pools and round dealing
//! - `expression`: Postfix evaluation of the token stream
//! - `round`: Round state machine and controller

pub mod core;
pub mod pool;
pub mod expression;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Tile, TileId, Operator, Token, format_tokens, RoundPhase,
    RoundRng, RoundRngState, RoundConfig, OperandCheck,
    Command, Result, RoundError,
};

pub use crate::pool::{RoundSetup, TilePoolGenerator};

pub use crate::expression::{Evaluation, ExpressionEngine};

pub use crate::round::{PlayingRound, RoundController, RoundOutcome, RoundState};
