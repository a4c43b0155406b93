//! Count On Me - A keypad-style arithmetic expression builder
//!
//! This library keeps a single expression buffer that grows one key at a time,
//! validates every edit against the current tokens, and evaluates the result with
//! multiplication and division taking precedence over addition and subtraction.

pub mod engine;
pub mod keys;
pub mod notify;
pub mod token;
pub mod utils;

use thiserror::Error;

// Re-export the main public API
pub use engine::{Engine, ErrorCase, Outcome};
pub use keys::{Key, KeyError, parse_keys};
pub use notify::{Listener, NotifyingEngine};
pub use token::{Operator, Token};

/// Errors returned by [`evaluate_expression`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),
    #[error("{}: {}", .0.title(), .0)]
    Rejected(#[from] ErrorCase),
}

/// Type a key sequence into a fresh engine and return the final display
///
/// The sequence is evaluated when it ends with an entry key (a digit, the
/// decimal point or an operator); sequences ending with `=`, `K`, `AC` or a
/// correction are returned as they stand.
///
/// # Arguments
///
/// * `text` - Keys as accepted by [`parse_keys`], e.g. `"40 + 6 x 9.3 ÷ 2"`
///
/// # Errors
///
/// This function will return an error if:
/// * The text contains a character that is not a keypad key
/// * Any key is rejected by the engine
///
/// # Examples
///
/// ```
/// use count_on_me::evaluate_expression;
///
/// match evaluate_expression("40 + 6 x 9.3 ÷ 2") {
///     Ok(display) => assert_eq!(display, "40 + 6 x 9.3 ÷ 2 = 67.9"),
///     Err(e) => panic!("unexpected error: {}", e),
/// }
/// ```
pub fn evaluate_expression(text: &str) -> Result<String, CalculatorError> {
    let keys = parse_keys(text)?;

    let mut engine = Engine::new();
    for key in &keys {
        engine.press(*key)?;
    }

    if keys.last().is_some_and(|key| key.is_entry()) {
        engine.evaluate()?;
    }

    Ok(engine.display().to_string())
}
