//! Expression engine: postfix evaluation of the player's token stream.
//!
//! Tiles push their value. An operator pops the last two values and pushes
//! `first OP second`, where `first` was pushed earlier. Operators without two
//! operands are skipped and evaluation carries on.
//!
//! ```
//! use numbers_round::core::{Operator, Tile, TileId, Token};
//! use numbers_round::expression::ExpressionEngine;
//!
//! let tokens = [
//!     Token::Tile(Tile::new(TileId::new(0), 10)),
//!     Token::Tile(Tile::new(TileId::new(1), 4)),
//!     Token::Operator(Operator::Subtract),
//! ];
//!
//! assert_eq!(ExpressionEngine::default().evaluate(&tokens), Some(6.0));
//! ```

mod evaluator;

pub use crate::core::OperandCheck;
pub use evaluator::{Evaluation, ExpressionEngine};
