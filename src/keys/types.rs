use std::fmt;

use crate::token::Operator;

/// One button of the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Operator),
    Equals,
    Correction,
    AllClear,
    Keep,
}

impl Key {
    /// Keys that extend the expression rather than act on it
    pub fn is_entry(self) -> bool {
        matches!(self, Key::Digit(_) | Key::Point | Key::Operator(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::Point => f.write_str("."),
            Key::Operator(op) => write!(f, "{}", op),
            Key::Equals => f.write_str("="),
            Key::Correction => f.write_str("C"),
            Key::AllClear => f.write_str("AC"),
            Key::Keep => f.write_str("K"),
        }
    }
}
