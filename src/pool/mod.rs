//! Tile pools and round dealing.
//!
//! ```
//! use numbers_round::core::RoundRng;
//! use numbers_round::pool::TilePoolGenerator;
//!
//! let generator = TilePoolGenerator::default();
//! let setup = generator.generate(2, &mut RoundRng::new(42)).unwrap();
//!
//! assert_eq!(setup.tiles().len(), 6);
//! assert!((100..=999).contains(&setup.target()));
//! ```

mod generator;
mod setup;

pub use generator::TilePoolGenerator;
pub use setup::RoundSetup;
