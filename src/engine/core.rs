use log::{debug, error, info, warn};

use crate::engine::errors::ErrorCase;
use crate::engine::predicates::{
    divides_by_zero, has_enough_tokens, has_result, last_is_operator, last_number_has_point,
    last_token_ends_with_point, starts_with_operator,
};
use crate::engine::reduce::reduce;
use crate::token::{Operator, Token, TokenError, tokenize};
use crate::utils::validate_digit_string;

/// Characters an operator occupies in the buffer: the glyph and a space either side
const OPERATOR_WIDTH: usize = 3;

/// The display text after an accepted operation, or why it was rejected
pub type Outcome = Result<String, ErrorCase>;

/// Owns the expression buffer and every operation that may change it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    buffer: String,
}

impl Engine {
    /// Create an engine with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// # Errors
    ///
    /// Returns an error if the buffer holds a piece that is not a token.
    pub fn tokens(&self) -> Result<Vec<Token>, TokenError> {
        tokenize(&self.buffer)
    }

    pub fn has_result(&self) -> bool {
        self.checked_tokens().is_ok_and(|tokens| has_result(&tokens))
    }

    /// Appends digits to the number being typed
    pub fn append_digits(&mut self, digits: &str) -> Outcome {
        let tokens = self.checked_tokens()?;
        if has_result(&tokens) {
            return self.reject(ErrorCase::OperationHasResult);
        }
        if validate_digit_string(digits).is_err() {
            return self.reject(ErrorCase::Syntax);
        }

        self.buffer.push_str(digits);
        self.accept()
    }

    pub fn append_decimal_point(&mut self) -> Outcome {
        let tokens = self.checked_tokens()?;
        if has_result(&tokens) {
            return self.reject(ErrorCase::OperationHasResult);
        }
        if tokens.is_empty() {
            return self.reject(ErrorCase::Syntax);
        }
        if last_number_has_point(&tokens) {
            return self.reject(ErrorCase::DecimalExists);
        }
        if last_is_operator(&tokens) {
            return self.reject(ErrorCase::Syntax);
        }

        self.buffer.push('.');
        self.accept()
    }

    pub fn append_operator(&mut self, op: Operator) -> Outcome {
        let tokens = self.checked_tokens()?;
        if has_result(&tokens) {
            return self.reject(ErrorCase::OperationHasResult);
        }
        if starts_with_operator(&tokens) {
            return self.reject(ErrorCase::OperationImpossible);
        }
        if last_token_ends_with_point(&tokens) {
            return self.reject(ErrorCase::Syntax);
        }
        if last_is_operator(&tokens) {
            return self.reject(ErrorCase::WrongOperator);
        }

        self.buffer.push(' ');
        self.buffer.push_str(op.symbol());
        self.buffer.push(' ');
        self.accept()
    }

    /// Same as [`Engine::append_operator`] for a raw keypad glyph
    pub fn append_operator_symbol(&mut self, symbol: &str) -> Outcome {
        match symbol.parse::<Operator>() {
            Ok(op) => self.append_operator(op),
            Err(_) => self.reject(ErrorCase::OperationImpossible),
        }
    }

    /// Removes the last operator with its spaces, or else the last character
    pub fn correction(&mut self) -> Outcome {
        let tokens = self.checked_tokens()?;
        if has_result(&tokens) {
            return self.reject(ErrorCase::OperationHasResult);
        }

        let width = if self.buffer.ends_with(' ') {
            OPERATOR_WIDTH
        } else {
            1
        };
        for _ in 0..width {
            self.buffer.pop();
        }
        self.accept()
    }

    pub fn clear(&mut self) -> Outcome {
        self.buffer.clear();
        self.accept()
    }

    /// Replaces an evaluated expression by its result so it can be reused
    pub fn keep_result(&mut self) -> Outcome {
        let tokens = self.checked_tokens()?;
        let kept = match tokens.last() {
            Some(Token::Number(numeral)) if has_result(&tokens) => numeral.literal().to_string(),
            _ => return self.reject(ErrorCase::Keeping),
        };

        self.buffer = kept;
        self.accept()
    }

    /// Reduces the expression and appends ` = <result>` to it
    pub fn evaluate(&mut self) -> Outcome {
        let tokens = self.checked_tokens()?;
        if !has_enough_tokens(&tokens) {
            return self.reject(ErrorCase::OperationImpossible);
        }
        if last_is_operator(&tokens) || has_result(&tokens) {
            return self.reject(ErrorCase::OperationHasResult);
        }
        if divides_by_zero(&tokens) {
            return self.reject(ErrorCase::DivideByZero);
        }
        if last_token_ends_with_point(&tokens) {
            return self.reject(ErrorCase::Syntax);
        }

        let result = match reduce(&tokens) {
            Ok(numeral) => numeral,
            Err(e) => {
                warn!("Reduction of '{}' failed: {}", self.buffer, e);
                return self.reject(ErrorCase::from(e));
            }
        };

        info!("Evaluated '{}' to {}", self.buffer, result);
        self.buffer.push_str(" = ");
        self.buffer.push_str(result.literal());
        self.accept()
    }

    fn checked_tokens(&self) -> Result<Vec<Token>, ErrorCase> {
        self.tokens().map_err(|e| {
            error!("Engine buffer '{}' is no longer valid: {}", self.buffer, e);
            ErrorCase::Syntax
        })
    }

    fn accept(&self) -> Outcome {
        debug!("Buffer is now '{}'", self.buffer);
        Ok(self.buffer.clone())
    }

    fn reject(&self, case: ErrorCase) -> Outcome {
        warn!("Rejected on '{}': {}", self.buffer, case);
        Err(case)
    }
}
