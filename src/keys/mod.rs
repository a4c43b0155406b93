//! Keypad input: the buttons a user can press and how they reach the engine

mod dispatch;
mod errors;
mod parse;
mod types;

pub use errors::KeyError;
pub use parse::parse_keys;
pub use types::Key;

#[cfg(test)]
mod tests;
