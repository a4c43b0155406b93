use thiserror::Error;

/// Errors raised while classifying buffer text into tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Malformed number: {0}")]
    MalformedNumber(String),
}
