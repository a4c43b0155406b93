use log::{debug, warn};

use crate::token::errors::TokenError;
use crate::token::types::{Numeral, Operator, Token};

/// # Errors
///
/// Returns an error if a piece of the buffer is neither a number, one of the
/// four operators, nor the `=` result marker.
pub fn tokenize(buffer: &str) -> Result<Vec<Token>, TokenError> {
    debug!("Tokenizing buffer: '{}'", buffer);

    buffer
        .split_whitespace()
        .map(classify)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!("Buffer '{}' failed to tokenize: {}", buffer, e))
}

fn classify(piece: &str) -> Result<Token, TokenError> {
    if piece == "=" {
        return Ok(Token::ResultMarker);
    }

    if let Ok(op) = piece.parse::<Operator>() {
        return Ok(Token::Operator(op));
    }

    if piece.chars().any(|c| c.is_ascii_digit()) {
        return piece.parse::<Numeral>().map(Token::Number);
    }

    Err(TokenError::UnknownOperator(piece.to_string()))
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::classify;
    use crate::token::{Operator, Token, TokenError};

    #[test]
    fn test_classify_operators() {
        assert_eq!(classify("+"), Ok(Token::Operator(Operator::Add)));
        assert_eq!(classify("-"), Ok(Token::Operator(Operator::Subtract)));
        assert_eq!(classify("x"), Ok(Token::Operator(Operator::Multiply)));
        assert_eq!(classify("÷"), Ok(Token::Operator(Operator::Divide)));
    }

    #[test]
    fn test_classify_marker_and_garbage() {
        assert_eq!(classify("="), Ok(Token::ResultMarker));
        assert_eq!(
            classify("/"),
            Err(TokenError::UnknownOperator("/".to_string()))
        );
        assert_eq!(
            classify("1.2.3"),
            Err(TokenError::MalformedNumber("1.2.3".to_string()))
        );
    }
}
