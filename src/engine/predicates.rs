//! Checks derived from the current token sequence

use crate::token::{Operator, Token};

/// Minimum tokens for one binary operation: operand, operator, operand
pub const MIN_OPERATION_TOKENS: usize = 3;

pub fn has_result(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| matches!(t, Token::ResultMarker))
}

/// An operator cannot open an expression
pub fn starts_with_operator(tokens: &[Token]) -> bool {
    tokens.first().is_none_or(Token::is_operator)
}

pub fn last_is_operator(tokens: &[Token]) -> bool {
    tokens.last().is_some_and(Token::is_operator)
}

pub fn has_enough_tokens(tokens: &[Token]) -> bool {
    has_result(tokens) || tokens.len() >= MIN_OPERATION_TOKENS
}

pub fn last_token_ends_with_point(tokens: &[Token]) -> bool {
    tokens
        .last()
        .and_then(Token::as_numeral)
        .is_some_and(|n| n.ends_with_point())
}

pub fn last_number_has_point(tokens: &[Token]) -> bool {
    tokens
        .last()
        .and_then(Token::as_numeral)
        .is_some_and(|n| n.has_point())
}

/// A `÷` whose right operand is a literal zero (`0`, `0.0`, `00`)
pub fn divides_by_zero(tokens: &[Token]) -> bool {
    tokens.windows(2).any(|pair| match pair {
        [Token::Operator(Operator::Divide), Token::Number(n)] => n.value() == 0.0,
        _ => false,
    })
}
