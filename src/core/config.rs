//! Round configuration.
//!
//! The standard round deals six tiles from two pools:
//! - Large pool: `25, 50, 75, 100`, each at most once
//! - Small pool: `1..=10`, each value twice (two decks)
//!
//! and a target in `100..=999`. Every parameter can be changed through the
//! builder methods; `validate()` checks the result is dealable.

use serde::{Deserialize, Serialize};

use super::error::{Result, RoundError};

/// How the evaluator decides that an operand is missing.
///
/// In every mode an operator seen with fewer than two values on the stack is
/// skipped without touching the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandCheck {
    /// Only an absent operand counts as missing. A zero is a valid operand.
    #[default]
    Presence,
    /// Zero and NaN operands also count as missing. The popped pair is
    /// dropped and the operator skipped.
    Truthy,
}

impl OperandCheck {
    pub(crate) fn rejects(self, value: f64) -> bool {
        match self {
            OperandCheck::Presence => false,
            OperandCheck::Truthy => value == 0.0 || value.is_nan(),
        }
    }
}

/// Large tile values of the standard round.
pub const LARGE_POOL: [i64; 4] = [25, 50, 75, 100];

/// Tiles dealt per standard round.
pub const TILE_COUNT: usize = 6;

/// Configuration for dealing and evaluating a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Large pool values, each usable once per round.
    pub large_pool: Vec<i64>,

    /// Small pool values, with repeats for multiplicity.
    pub small_pool: Vec<i64>,

    /// Tiles dealt per round.
    pub tile_count: usize,

    /// Lowest possible target (inclusive).
    pub target_min: i64,

    /// Highest possible target (inclusive).
    pub target_max: i64,

    /// How the evaluator decides an operand is missing.
    pub operand_check: OperandCheck,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            large_pool: LARGE_POOL.to_vec(),
            small_pool: (1..=10).flat_map(|v| [v, v]).collect(),
            tile_count: TILE_COUNT,
            target_min: 100,
            target_max: 999,
            operand_check: OperandCheck::default(),
        }
    }
}

impl RoundConfig {
    /// Standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the large pool.
    #[must_use]
    pub fn with_large_pool(mut self, values: impl Into<Vec<i64>>) -> Self {
        self.large_pool = values.into();
        self
    }

    /// Replace the small pool.
    #[must_use]
    pub fn with_small_pool(mut self, values: impl Into<Vec<i64>>) -> Self {
        self.small_pool = values.into();
        self
    }

    /// Set the number of tiles dealt.
    #[must_use]
    pub fn with_tile_count(mut self, count: usize) -> Self {
        self.tile_count = count;
        self
    }

    /// Set the inclusive target range.
    #[must_use]
    pub fn with_target_range(mut self, min: i64, max: i64) -> Self {
        self.target_min = min;
        self.target_max = max;
        self
    }

    /// Set the operand presence policy.
    #[must_use]
    pub fn with_operand_check(mut self, check: OperandCheck) -> Self {
        self.operand_check = check;
        self
    }

    /// Largest legal large-tile count.
    #[must_use]
    pub fn max_large(&self) -> usize {
        self.large_pool.len().min(self.tile_count)
    }

    /// Smallest legal large-tile count (the small pool must cover the rest).
    #[must_use]
    pub fn min_large(&self) -> usize {
        self.tile_count.saturating_sub(self.small_pool.len())
    }

    /// Check that a round can be dealt from this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tile_count == 0 {
            return Err(RoundError::InvalidConfig("tile count must be positive".into()));
        }
        if self.tile_count > usize::from(u8::MAX) {
            return Err(RoundError::InvalidConfig(format!(
                "tile count {} exceeds {}",
                self.tile_count,
                u8::MAX
            )));
        }
        if self.target_min > self.target_max {
            return Err(RoundError::InvalidConfig(format!(
                "target range {}..={} is empty",
                self.target_min, self.target_max
            )));
        }
        if self.min_large() > self.max_large() {
            return Err(RoundError::InvalidConfig(format!(
                "pools hold {} tiles, {} needed",
                self.large_pool.len() + self.small_pool.len(),
                self.tile_count
            )));
        }
        Ok(())
    }

    /// Check a requested large-tile count against the pools.
    pub fn check_large_count(&self, requested: usize) -> Result<()> {
        if requested < self.min_large() || requested > self.max_large() {
            return Err(RoundError::InvalidLargeCount {
                requested,
                max: self.max_large(),
            });
        }
        Ok(())
    }
}
