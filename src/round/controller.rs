//! Round controller: the single owner of a round's state.

use im::Vector;
use log::debug;

use super::state::{PlayingRound, RoundOutcome, RoundState};
use crate::core::{
    Command, Operator, Result, RoundConfig, RoundError, RoundPhase, RoundRng, RoundRngState, Tile, TileId, Token,
};
use crate::expression::ExpressionEngine;
use crate::pool::{RoundSetup, TilePoolGenerator};

/// Drives one round through `Initial -> Playing -> Done`.
///
/// Every command either applies fully and recomputes the current value, or
/// returns an error and leaves the state untouched.
///
/// ```
/// use numbers_round::core::Operator;
/// use numbers_round::pool::RoundSetup;
/// use numbers_round::round::RoundController;
///
/// let mut round = RoundController::new(42);
/// round.start_with_setup(RoundSetup::new(140, &[3, 4, 2, 10, 1, 5])).unwrap();
///
/// let tiles = round.available_tiles();
/// round.append_tile(tiles[0].id).unwrap();
/// round.append_tile(tiles[1].id).unwrap();
/// round.append_operator(Operator::Add).unwrap();
/// round.append_tile(tiles[2].id).unwrap();
/// round.append_operator(Operator::Multiply).unwrap();
/// round.append_tile(tiles[3].id).unwrap();
/// round.append_operator(Operator::Multiply).unwrap();
///
/// let outcome = round.commit().unwrap();
/// assert!(outcome.is_exact());
/// ```
#[derive(Clone, Debug)]
pub struct RoundController {
    generator: TilePoolGenerator,
    engine: ExpressionEngine,
    rng: RoundRng,
    state: RoundState,
}

impl RoundController {
    /// Create a controller with the standard configuration and a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            generator: TilePoolGenerator::default(),
            engine: ExpressionEngine::default(),
            rng: RoundRng::new(seed),
            state: RoundState::Initial,
        }
    }

    /// Create a controller with the standard configuration and OS randomness.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RoundRng::from_entropy().seed())
    }

    /// Create a controller from a custom configuration and RNG.
    pub fn with_config(config: RoundConfig, rng: RoundRng) -> Result<Self> {
        let engine = ExpressionEngine::new(config.operand_check);
        let generator = TilePoolGenerator::new(config)?;
        Ok(Self {
            generator,
            engine,
            rng,
            state: RoundState::Initial,
        })
    }

    // === Queries ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        self.generator.config()
    }

    /// Derived value of the token stream. `None` outside `Playing`.
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        self.state.playing().and_then(PlayingRound::current_value)
    }

    /// The dealt setup, while playing.
    #[must_use]
    pub fn setup(&self) -> Option<&RoundSetup> {
        self.state.playing().map(PlayingRound::setup)
    }

    /// Tokens entered so far, while playing.
    #[must_use]
    pub fn tokens(&self) -> Option<&Vector<Token>> {
        self.state.playing().map(PlayingRound::tokens)
    }

    /// Tiles not yet entered. Empty outside `Playing`.
    #[must_use]
    pub fn available_tiles(&self) -> Vec<Tile> {
        self.state
            .playing()
            .map(PlayingRound::available_tiles)
            .unwrap_or_default()
    }

    /// RNG checkpoint, for replaying subsequent deals.
    #[must_use]
    pub fn rng_state(&self) -> RoundRngState {
        self.rng.state()
    }

    // === Commands ===

    /// Deal a new round with `large_count` large tiles.
    ///
    /// Allowed from any state; a round in progress or a committed outcome is
    /// discarded. On error the previous state is kept.
    pub fn start_round(&mut self, large_count: usize) -> Result<RoundSetup> {
        let setup = self.generator.generate(large_count, &mut self.rng)?;
        Ok(self.begin(setup))
    }

    /// Start playing a pre-dealt setup, e.g. to replay a recorded round.
    ///
    /// The setup must be one the configured pools could deal: same tile
    /// count, target in range, values within pool multiplicities. On error
    /// the previous state is kept.
    pub fn start_with_setup(&mut self, setup: RoundSetup) -> Result<RoundSetup> {
        self.generator.check_setup(&setup)?;
        Ok(self.begin(setup))
    }

    fn begin(&mut self, setup: RoundSetup) -> RoundSetup {
        if self.phase() != RoundPhase::Initial {
            debug!("discarding {} round to start a new one", self.phase());
        }
        debug!("round started: target {}", setup.target());

        self.state = RoundState::Playing(PlayingRound::new(setup.clone(), self.engine));
        setup
    }

    /// Append a tile or operator and recompute the current value.
    ///
    /// Tiles must belong to the current setup and not already be entered.
    /// Operators are always accepted.
    pub fn append_token(&mut self, token: Token) -> Result<Option<f64>> {
        let round = self.playing_mut(Command::AppendToken)?;

        if let Token::Tile(tile) = &token {
            if !round.setup().contains(tile) {
                return Err(RoundError::UnknownTile(tile.id));
            }
            if round.is_used(tile.id) {
                return Err(RoundError::DuplicateTileUse(tile.id));
            }
        }

        round.push(token);
        debug!("appended `{}`, value now {:?}", token, round.current_value());
        Ok(round.current_value())
    }

    /// Append the tile in slot `id`.
    pub fn append_tile(&mut self, id: TileId) -> Result<Option<f64>> {
        let round = self.playing_mut(Command::AppendToken)?;
        let tile = *round.setup().tile(id).ok_or(RoundError::UnknownTile(id))?;
        self.append_token(Token::Tile(tile))
    }

    /// Append an operator.
    pub fn append_operator(&mut self, op: Operator) -> Result<Option<f64>> {
        self.append_token(Token::Operator(op))
    }

    /// Remove the last token and recompute the current value.
    ///
    /// Returns the removed token; with no tokens entered this is a no-op
    /// returning `None`.
    pub fn remove_last_token(&mut self) -> Result<Option<Token>> {
        let round = self.playing_mut(Command::RemoveLastToken)?;

        let removed = round.pop();
        if let Some(token) = &removed {
            debug!("removed `{}`, value now {:?}", token, round.current_value());
        }
        Ok(removed)
    }

    /// Commit the current value as the round's outcome.
    ///
    /// An absent value commits as 0. Setup and tokens are discarded.
    pub fn commit(&mut self) -> Result<RoundOutcome> {
        let round = self.playing_mut(Command::Commit)?;

        let outcome = RoundOutcome {
            target: round.setup().target(),
            final_value: round.current_value().unwrap_or(0.0),
        };

        debug!(
            "round committed: {} for target {} (off by {})",
            outcome.final_value,
            outcome.target,
            outcome.distance()
        );
        self.state = RoundState::Done(outcome);
        Ok(outcome)
    }

    /// Return to `Initial`, discarding all round data. Valid from any state.
    pub fn reset(&mut self) {
        if self.phase() != RoundPhase::Initial {
            debug!("reset from {}", self.phase());
        }
        self.state = RoundState::Initial;
    }

    fn playing_mut(&mut self, command: Command) -> Result<&mut PlayingRound> {
        match &mut self.state {
            RoundState::Playing(round) => Ok(round),
            other => Err(RoundError::InvalidTransition {
                command,
                phase: other.phase(),
            }),
        }
    }
}
