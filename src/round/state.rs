//! Round lifecycle states.
//!
//! ## RoundState
//!
//! - `Initial`: nothing dealt yet
//! - `Playing`: setup dealt, tokens being entered, current value derived
//! - `Done`: terminal outcome captured at commit
//!
//! Tokens live in an `im::Vector`, so cloning a state for a UI snapshot is O(1).
//!
//! Snapshots never store the current value. Restoring a playing round
//! re-checks its tokens against the setup and evaluates them again.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{OperandCheck, RoundError, RoundPhase, Tile, TileId, Token};
use crate::expression::ExpressionEngine;
use crate::pool::RoundSetup;

/// A round in progress.
///
/// `current_value` is derived from `tokens` and recomputed on every change;
/// there is no way to set it directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayingRecord", into = "PlayingRecord")]
pub struct PlayingRound {
    setup: RoundSetup,
    tokens: Vector<Token>,
    engine: ExpressionEngine,
    current_value: Option<f64>,
}

impl PlayingRound {
    pub(crate) fn new(setup: RoundSetup, engine: ExpressionEngine) -> Self {
        Self {
            setup,
            tokens: Vector::new(),
            engine,
            current_value: None,
        }
    }

    /// The dealt target and tiles.
    #[must_use]
    pub fn setup(&self) -> &RoundSetup {
        &self.setup
    }

    /// Tokens entered so far, oldest first.
    #[must_use]
    pub fn tokens(&self) -> &Vector<Token> {
        &self.tokens
    }

    /// Value of the token stream, or `None` if nothing evaluates yet.
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        self.current_value
    }

    /// Operand policy the value is computed with.
    #[must_use]
    pub fn operand_check(&self) -> OperandCheck {
        self.engine.operand_check()
    }

    /// Check whether a tile has been entered.
    #[must_use]
    pub fn is_used(&self, id: TileId) -> bool {
        self.tokens.iter().any(|t| t.tile_id() == Some(id))
    }

    /// IDs of all tiles entered so far.
    #[must_use]
    pub fn used_tiles(&self) -> FxHashSet<TileId> {
        self.tokens.iter().filter_map(Token::tile_id).collect()
    }

    /// Tiles not yet entered, in setup order.
    #[must_use]
    pub fn available_tiles(&self) -> Vec<Tile> {
        let used = self.used_tiles();
        self.setup
            .tiles()
            .iter()
            .filter(|t| !used.contains(&t.id))
            .copied()
            .collect()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
        self.recompute();
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop_back()?;
        self.recompute();
        Some(token)
    }

    fn recompute(&mut self) {
        self.current_value = self.engine.evaluate(self.tokens.iter());
    }
}

/// Wire form of a playing round: everything except the derived value.
#[derive(Serialize, Deserialize)]
struct PlayingRecord {
    setup: RoundSetup,
    tokens: Vector<Token>,
    #[serde(default)]
    operand_check: OperandCheck,
}

impl From<PlayingRound> for PlayingRecord {
    fn from(round: PlayingRound) -> Self {
        Self {
            operand_check: round.operand_check(),
            setup: round.setup,
            tokens: round.tokens,
        }
    }
}

impl TryFrom<PlayingRecord> for PlayingRound {
    type Error = RoundError;

    fn try_from(record: PlayingRecord) -> Result<Self, Self::Error> {
        let mut seen = FxHashSet::default();
        for tile in record.tokens.iter().filter_map(|t| match t {
            Token::Tile(tile) => Some(tile),
            Token::Operator(_) => None,
        }) {
            if !record.setup.contains(tile) {
                return Err(RoundError::UnknownTile(tile.id));
            }
            if !seen.insert(tile.id) {
                return Err(RoundError::DuplicateTileUse(tile.id));
            }
        }

        let mut round = Self {
            setup: record.setup,
            tokens: record.tokens,
            engine: ExpressionEngine::new(record.operand_check),
            current_value: None,
        };
        round.recompute();
        Ok(round)
    }
}

/// Terminal result of a committed round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The target that was dealt.
    pub target: i64,
    /// Value at commit time (0 if nothing evaluated).
    #[serde(with = "any_f64")]
    pub final_value: f64,
}

impl RoundOutcome {
    /// Absolute distance from the target. Non-finite values stay non-finite.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.target as f64 - self.final_value).abs()
    }

    /// True if the target was hit exactly.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.distance() == 0.0
    }
}

/// Serde for `f64` that survives formats without infinities or NaN.
///
/// Finite values are written as numbers, the rest as `"inf"`, `"-inf"` or
/// `"NaN"`.
mod any_f64 {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(text) => text.parse().map_err(D::Error::custom),
        }
    }
}

/// State of a single round.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Initial,
    Playing(PlayingRound),
    Done(RoundOutcome),
}

impl RoundState {
    /// The phase of this state.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match self {
            RoundState::Initial => RoundPhase::Initial,
            RoundState::Playing(_) => RoundPhase::Playing,
            RoundState::Done(_) => RoundPhase::Done,
        }
    }

    /// The round in progress, if playing.
    #[must_use]
    pub fn playing(&self) -> Option<&PlayingRound> {
        match self {
            RoundState::Playing(round) => Some(round),
            _ => None,
        }
    }

    /// The committed outcome, if done.
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match self {
            RoundState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}
