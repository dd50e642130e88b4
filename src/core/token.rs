//! Input tokens: tiles and arithmetic operators.
//!
//! A round's input is an append-only stream of tokens evaluated in postfix
//! order. `3 4 + 2 *` means `(3 + 4) * 2`.
//!
//! ```
//! use numbers_round::core::{format_tokens, Operator, Tile, TileId, Token};
//!
//! let tokens = [
//!     Token::Tile(Tile::new(TileId::new(0), 3)),
//!     Token::Tile(Tile::new(TileId::new(1), 4)),
//!     Token::Operator(Operator::Add),
//! ];
//! assert_eq!(format_tokens(&tokens), "3 4 +");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RoundError;
use super::tile::{Tile, TileId};

/// The four basic arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Apply to `lhs` (pushed first) and `rhs` (pushed last).
    ///
    /// Division is real division; a zero divisor yields a non-finite value.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "x" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(RoundError::ParseToken(other.to_string())),
        }
    }
}

/// One entry of the input stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Tile(Tile),
    Operator(Operator),
}

impl Token {
    /// The tile identity, if this is a tile token.
    #[must_use]
    pub fn tile_id(&self) -> Option<TileId> {
        match self {
            Token::Tile(tile) => Some(tile.id),
            Token::Operator(_) => None,
        }
    }
}

impl From<Tile> for Token {
    fn from(tile: Tile) -> Self {
        Token::Tile(tile)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Tile(tile) => write!(f, "{}", tile.value),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Render a token stream space-separated, as a player would read it back.
#[must_use]
pub fn format_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
