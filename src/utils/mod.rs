//! Utils module split into submodules

mod errors;
mod format;
mod validation;

pub use errors::UtilsError;
pub use format::{MAX_FRACTION_DIGITS, format_number};
pub use validation::validate_digit_string;
