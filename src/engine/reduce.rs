use log::debug;

use crate::engine::errors::ReductionError;
use crate::token::{Numeral, Operator, Token};
use crate::utils::format_number;

/// Collapses a flat `number (operator number)*` sequence into one number.
///
/// Each pass picks the leftmost `x`/`÷` if any remain, otherwise the leftmost
/// `+`/`-`, and replaces `[left, operator, right]` with the formatted result.
/// Intermediate results are rounded exactly as the final one is displayed.
///
/// # Errors
///
/// Returns an error when the sequence is not well formed, when a divisor is
/// zero, or when a step overflows to a non-finite value.
pub fn reduce(tokens: &[Token]) -> Result<Numeral, ReductionError> {
    let mut pending = tokens.to_vec();

    while pending.len() > 1 {
        let pivot = find_pivot(&pending).ok_or(ReductionError::NoOperator(pending.len()))?;
        let numeral = reduce_at(&pending, pivot)?;
        debug!(
            "Reduced '{} {} {}' to {}",
            pending[pivot - 1],
            pending[pivot],
            pending[pivot + 1],
            numeral
        );
        pending.splice(pivot - 1..=pivot + 1, [Token::Number(numeral)]);
    }

    match pending.pop() {
        Some(Token::Number(numeral)) => Ok(numeral),
        Some(_) => Err(ReductionError::MissingOperand(0)),
        None => Err(ReductionError::NoOperator(0)),
    }
}

fn find_pivot(tokens: &[Token]) -> Option<usize> {
    let priority = tokens
        .iter()
        .position(|t| matches!(t, Token::Operator(op) if op.is_priority()));
    priority.or_else(|| tokens.iter().position(Token::is_operator))
}

fn reduce_at(tokens: &[Token], pivot: usize) -> Result<Numeral, ReductionError> {
    let operand = |index: Option<usize>| {
        index
            .and_then(|i| tokens.get(i))
            .and_then(Token::as_numeral)
            .map(Numeral::value)
            .ok_or(ReductionError::MissingOperand(pivot))
    };

    let Some(Token::Operator(op)) = tokens.get(pivot) else {
        return Err(ReductionError::NoOperator(tokens.len()));
    };
    let left = operand(pivot.checked_sub(1))?;
    let right = operand(Some(pivot + 1))?;

    if *op == Operator::Divide && right == 0.0 {
        return Err(ReductionError::DivisionByZero);
    }

    let text = format_number(op.apply(left, right))?;
    Ok(text.parse::<Numeral>()?)
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::find_pivot;
    use crate::token::tokenize;

    #[test]
    fn test_find_pivot_prefers_priority_operators() {
        let tokens = tokenize("40 + 6 x 9.3 ÷ 2").unwrap_or_default();
        assert_eq!(find_pivot(&tokens), Some(3));
    }

    #[test]
    fn test_find_pivot_leftmost_classic_operator() {
        let tokens = tokenize("1 - 2 + 3").unwrap_or_default();
        assert_eq!(find_pivot(&tokens), Some(1));
    }

    #[test]
    fn test_find_pivot_none() {
        let tokens = tokenize("12").unwrap_or_default();
        assert_eq!(find_pivot(&tokens), None);
    }
}
