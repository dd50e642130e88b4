//! Tile and target generation.

use log::debug;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::setup::RoundSetup;
use crate::core::{Result, RoundConfig, RoundError, RoundRng};

/// Deals the tiles and target for a round.
///
/// Pools are copied and shuffled per round, so each large value appears at
/// most once and each small value at most as often as the small pool holds it.
#[derive(Clone, Debug)]
pub struct TilePoolGenerator {
    config: RoundConfig,
}

impl Default for TilePoolGenerator {
    fn default() -> Self {
        Self {
            config: RoundConfig::default(),
        }
    }
}

impl TilePoolGenerator {
    /// Create a generator for a validated configuration.
    pub fn new(config: RoundConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Deal a round with `large_count` large tiles.
    ///
    /// Large tiles fill the first slots, small tiles the rest.
    pub fn generate(&self, large_count: usize, rng: &mut RoundRng) -> Result<RoundSetup> {
        self.config.check_large_count(large_count)?;

        let mut large = self.config.large_pool.clone();
        let mut small = self.config.small_pool.clone();
        rng.shuffle(&mut large);
        rng.shuffle(&mut small);

        let small_count = self.config.tile_count - large_count;
        let values: SmallVec<[i64; 6]> = large
            .into_iter()
            .take(large_count)
            .chain(small.into_iter().take(small_count))
            .collect();

        let target = rng.gen_range(self.config.target_min..=self.config.target_max);

        debug!("dealt target {} with tiles {:?}", target, values);
        Ok(RoundSetup::new(target, &values))
    }

    /// Check that `setup` could have been dealt by this generator.
    ///
    /// The tile count and target range must match the configuration, and
    /// every value must be drawn from the pools no more often than they hold it.
    pub fn check_setup(&self, setup: &RoundSetup) -> Result<()> {
        let dealt = setup.tiles().len();
        if dealt != self.config.tile_count {
            return Err(RoundError::InvalidSetup(format!(
                "{} tiles dealt, {} expected",
                dealt, self.config.tile_count
            )));
        }

        let target = setup.target();
        if target < self.config.target_min || target > self.config.target_max {
            return Err(RoundError::InvalidSetup(format!(
                "target {} outside {}..={}",
                target, self.config.target_min, self.config.target_max
            )));
        }

        let mut remaining: FxHashMap<i64, usize> = FxHashMap::default();
        for &v in self.config.large_pool.iter().chain(&self.config.small_pool) {
            *remaining.entry(v).or_insert(0) += 1;
        }
        for v in setup.values() {
            match remaining.get_mut(&v) {
                Some(n) if *n > 0 => *n -= 1,
                _ => {
                    return Err(RoundError::InvalidSetup(format!(
                        "tile value {} exceeds what the pools hold",
                        v
                    )));
                }
            }
        }
        Ok(())
    }
}
