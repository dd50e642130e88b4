//! The dealt tiles and target for one round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{RoundError, Tile, TileId};

/// Target and tiles of a round. Created once, immutable thereafter.
///
/// Tile IDs are assigned in slot order, so `tiles()[i].id == TileId(i)`.
/// Deserialization rejects tiles whose ID does not match their slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SetupRecord", into = "SetupRecord")]
pub struct RoundSetup {
    target: i64,
    tiles: SmallVec<[Tile; 6]>,
}

impl RoundSetup {
    /// Build a setup from tile values in slot order.
    ///
    /// Panics if more than 256 values are given.
    #[must_use]
    pub fn new(target: i64, values: &[i64]) -> Self {
        assert!(values.len() <= 256, "At most 256 tiles supported");

        let tiles = values
            .iter()
            .enumerate()
            .map(|(slot, &value)| Tile::new(TileId::new(slot as u8), value))
            .collect();

        Self { target, tiles }
    }

    /// The number to reach.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// All tiles, in slot order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by ID.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Check that `tile` is exactly one of this round's tiles.
    #[must_use]
    pub fn contains(&self, tile: &Tile) -> bool {
        self.tile(tile.id) == Some(tile)
    }

    /// Tile values, in slot order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.tiles.iter().map(|t| t.value)
    }
}

/// Wire form of a setup.
#[derive(Serialize, Deserialize)]
struct SetupRecord {
    target: i64,
    tiles: Vec<Tile>,
}

impl From<RoundSetup> for SetupRecord {
    fn from(setup: RoundSetup) -> Self {
        Self {
            target: setup.target,
            tiles: setup.tiles.into_vec(),
        }
    }
}

impl TryFrom<SetupRecord> for RoundSetup {
    type Error = RoundError;

    fn try_from(record: SetupRecord) -> Result<Self, Self::Error> {
        if record.tiles.len() > 256 {
            return Err(RoundError::InvalidSetup(format!("{} tiles, at most 256", record.tiles.len())));
        }
        if let Some((slot, tile)) = record.tiles.iter().enumerate().find(|(slot, t)| t.id.index() != *slot) {
            return Err(RoundError::InvalidSetup(format!("{} sits in slot {}", tile.id, slot)));
        }
        Ok(Self {
            target: record.target,
            tiles: record.tiles.into_iter().collect(),
        })
    }
}
