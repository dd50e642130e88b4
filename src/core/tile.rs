//! Tile identification.
//!
//! Two tiles can share a value (the small pool holds every value twice),
//! so a tile is identified by its slot in the round setup, never by value.
//!
//! ```
//! use numbers_round::core::{Tile, TileId};
//!
//! let first = Tile::new(TileId::new(0), 7);
//! let second = Tile::new(TileId::new(1), 7);
//!
//! assert_eq!(first.value, second.value);
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Slot index of a tile within its round setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// One numeric tile dealt for a round. Immutable once generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Slot in the setup.
    pub id: TileId,
    /// Face value.
    pub value: i64,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(id: TileId, value: i64) -> Self {
        Self { id, value }
    }
}
