//! Postfix evaluation of a token stream.

use log::warn;
use smallvec::SmallVec;

use crate::core::{OperandCheck, Operator, Token};

/// Outcome of folding a token stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    stack: SmallVec<[f64; 8]>,
    skipped: usize,
}

impl Evaluation {
    /// The bottom-most stack value, or `None` for an empty stack.
    ///
    /// A partial stream leaves several values; the first one pushed is
    /// reported regardless.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.stack.first().copied()
    }

    /// Residual operand stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// True when the stream reduced to exactly one value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stack.len() == 1
    }

    /// Number of operators skipped for lack of operands.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Stateless postfix evaluator.
///
/// Each call folds the stream from scratch, so evaluating the same tokens
/// twice always gives the same result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpressionEngine {
    check: OperandCheck,
}

impl ExpressionEngine {
    /// Create an engine with the given operand policy.
    #[must_use]
    pub const fn new(check: OperandCheck) -> Self {
        Self { check }
    }

    /// The operand policy in use.
    #[must_use]
    pub const fn operand_check(&self) -> OperandCheck {
        self.check
    }

    /// Current value of a token stream, or `None` if nothing is on the stack.
    pub fn evaluate<'a>(&self, tokens: impl IntoIterator<Item = &'a Token>) -> Option<f64> {
        self.fold(tokens).value()
    }

    /// Fold a token stream, keeping the residual stack.
    pub fn fold<'a>(&self, tokens: impl IntoIterator<Item = &'a Token>) -> Evaluation {
        let mut eval = Evaluation::default();

        for (position, token) in tokens.into_iter().enumerate() {
            match token {
                Token::Tile(tile) => eval.stack.push(tile.value as f64),
                Token::Operator(op) => {
                    if !self.apply(&mut eval.stack, *op) {
                        warn!("skipping `{}` at position {}: not enough operands", op, position);
                        eval.skipped += 1;
                    }
                }
            }
        }

        eval
    }

    /// Apply one operator. Returns false if it was skipped.
    fn apply(&self, stack: &mut SmallVec<[f64; 8]>, op: Operator) -> bool {
        if stack.len() < 2 {
            return false;
        }

        // Checked above: both pops succeed.
        let rhs = stack.pop().unwrap_or_default();
        let lhs = stack.pop().unwrap_or_default();

        if self.check.rejects(rhs) || self.check.rejects(lhs) {
            return false;
        }

        stack.push(op.apply(lhs, rhs));
        true
    }
}
