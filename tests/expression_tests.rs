//! Expression engine integration tests.
//!
//! These tests evaluate token streams built from dealt tiles, including
//! partial input and operators entered without enough operands.

use numbers_round::core::{Operator, Tile, TileId, Token};
use numbers_round::expression::{ExpressionEngine, OperandCheck};
use numbers_round::pool::RoundSetup;

fn tiles(values: &[i64]) -> Vec<Token> {
    RoundSetup::new(100, values)
        .tiles()
        .iter()
        .copied()
        .map(Token::Tile)
        .collect()
}

/// Test the worked examples of the game rules.
#[test]
fn test_worked_examples() {
    let engine = ExpressionEngine::default();

    assert_eq!(engine.evaluate(&Vec::<Token>::new()), None);
    assert_eq!(engine.evaluate(&tiles(&[7])), Some(7.0));

    let mut stream = tiles(&[10, 4]);
    stream.push(Token::Operator(Operator::Subtract));
    assert_eq!(engine.evaluate(&stream), Some(6.0));

    let t = tiles(&[3, 4, 2]);
    let stream = vec![t[0], t[1], Operator::Add.into(), t[2], Operator::Multiply.into()];
    assert_eq!(engine.evaluate(&stream), Some(14.0));

    let stream = vec![t[0], Operator::Divide.into()];
    let eval = engine.fold(&stream);
    assert_eq!(eval.stack(), &[3.0]);
    assert_eq!(eval.value(), Some(3.0));
}

/// Test a full six-tile solution.
#[test]
fn test_full_solution() {
    let engine = ExpressionEngine::default();
    let t = tiles(&[75, 50, 2, 3, 8, 7]);

    // (75 + 50) * 8 / 2 - 3 * 7 = 479
    let stream = vec![
        t[0],
        t[1],
        Operator::Add.into(),
        t[4],
        Operator::Multiply.into(),
        t[2],
        Operator::Divide.into(),
        t[3],
        t[5],
        Operator::Multiply.into(),
        Operator::Subtract.into(),
    ];

    let eval = engine.fold(&stream);
    assert_eq!(eval.value(), Some(479.0));
    assert!(eval.is_complete());
}

/// Test that evaluating every prefix of a stream never panics and that
/// re-evaluating gives the same answer.
#[test]
fn test_prefixes_are_stable() {
    let engine = ExpressionEngine::default();
    let t = tiles(&[100, 6, 1, 9]);
    let stream = vec![
        Operator::Multiply.into(),
        t[0],
        t[1],
        Operator::Divide.into(),
        Operator::Divide.into(),
        t[2],
        Operator::Subtract.into(),
        t[3],
    ];

    for len in 0..=stream.len() {
        let prefix = &stream[..len];
        assert_eq!(engine.fold(prefix), engine.fold(prefix));
    }
}

/// Test that division by zero is propagated as a non-finite value.
#[test]
fn test_non_finite_results() {
    let engine = ExpressionEngine::default();
    let t = tiles(&[8, 2, 2]);

    let stream = vec![t[0], t[1], t[2], Operator::Subtract.into(), Operator::Divide.into()];
    assert_eq!(engine.evaluate(&stream), Some(f64::INFINITY));

    let stream = vec![t[1], t[2], Operator::Subtract.into(), t[1], t[2], Operator::Subtract.into(), Operator::Divide.into()];
    assert!(engine.evaluate(&stream).unwrap().is_nan());
}

/// Test that the truthy policy drops a zero intermediate result.
#[test]
fn test_truthy_policy_drops_zero() {
    let t = tiles(&[5, 5, 10]);
    let stream = vec![
        t[0],
        t[1],
        Operator::Subtract.into(),
        t[2],
        Operator::Multiply.into(),
    ];

    assert_eq!(ExpressionEngine::default().evaluate(&stream), Some(0.0));

    let truthy = ExpressionEngine::new(OperandCheck::Truthy);
    assert_eq!(truthy.evaluate(&stream), None);
    assert_eq!(truthy.fold(&stream).skipped(), 1);
}

/// Test that equal-valued tiles evaluate independently.
#[test]
fn test_duplicate_values() {
    let engine = ExpressionEngine::default();
    let a = Token::Tile(Tile::new(TileId::new(0), 9));
    let b = Token::Tile(Tile::new(TileId::new(1), 9));

    assert_eq!(engine.evaluate(&[a, b, Operator::Multiply.into()]), Some(81.0));
}
