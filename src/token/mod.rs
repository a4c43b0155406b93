//! Token module: typed view of the expression buffer

mod errors;
mod parse;
mod types;

pub use errors::TokenError;
pub use parse::tokenize;
pub use types::{Numeral, Operator, Token};

#[cfg(test)]
mod tests;
