use thiserror::Error;

use crate::token::TokenError;
use crate::utils::UtilsError;

/// Why an engine operation was rejected. The buffer is never touched when one
/// of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCase {
    #[error("This operation is impossible")]
    OperationImpossible,
    #[error("This operation has a result. Press K to keep the last result or AC to clear")]
    OperationHasResult,
    #[error("An operator already exists!")]
    WrongOperator,
    #[error("You tried to divide by 0. This operation is impossible")]
    DivideByZero,
    #[error("A decimal point was already added to this number")]
    DecimalExists,
    #[error("Nothing to keep")]
    Keeping,
    #[error("Syntax error, you need to correct the operation")]
    Syntax,
}

impl ErrorCase {
    pub const ALL: [ErrorCase; 7] = [
        ErrorCase::OperationImpossible,
        ErrorCase::OperationHasResult,
        ErrorCase::WrongOperator,
        ErrorCase::DivideByZero,
        ErrorCase::DecimalExists,
        ErrorCase::Keeping,
        ErrorCase::Syntax,
    ];

    /// Alert title shown above the message
    pub fn title(self) -> &'static str {
        match self {
            ErrorCase::OperationImpossible
            | ErrorCase::WrongOperator
            | ErrorCase::DivideByZero
            | ErrorCase::Keeping => "Error",
            ErrorCase::OperationHasResult | ErrorCase::DecimalExists => "Warning",
            ErrorCase::Syntax => "Correction",
        }
    }

    pub fn message(self) -> String {
        self.to_string()
    }
}

/// Internal failures of the reduction loop. Validated buffers never produce
/// these except for overflow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReductionError {
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error("Utils error: {0}")]
    Utils(#[from] UtilsError),
    #[error("No operator left to reduce in {0} tokens")]
    NoOperator(usize),
    #[error("Operator at position {0} is missing an operand")]
    MissingOperand(usize),
    #[error("Division by zero")]
    DivisionByZero,
}

impl From<ReductionError> for ErrorCase {
    fn from(err: ReductionError) -> Self {
        match err {
            ReductionError::DivisionByZero => ErrorCase::DivideByZero,
            ReductionError::Token(_) | ReductionError::MissingOperand(_) => ErrorCase::Syntax,
            ReductionError::Utils(_) | ReductionError::NoOperator(_) => {
                ErrorCase::OperationImpossible
            }
        }
    }
}
