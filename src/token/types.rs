use std::fmt;
use std::str::FromStr;

use crate::token::errors::TokenError;

/// The four binary operators of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Glyph written into the buffer
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "÷",
        }
    }

    /// Multiplication and division resolve before addition and subtraction
    pub fn is_priority(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| TokenError::UnknownOperator(s.to_string()))
    }
}

/// A number token, keeping the literal text so trailing points stay visible
#[derive(Debug, Clone, PartialEq)]
pub struct Numeral {
    literal: String,
    value: f64,
}

impl Numeral {
    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn has_point(&self) -> bool {
        self.literal.contains('.')
    }

    pub fn ends_with_point(&self) -> bool {
        self.literal.ends_with('.')
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl FromStr for Numeral {
    type Err = TokenError;

    /// Accepts an optional leading `-`, at least one digit and at most one `.`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let digit_count = unsigned.chars().filter(char::is_ascii_digit).count();
        let point_count = unsigned.chars().filter(|c| *c == '.').count();

        if digit_count == 0 || point_count > 1 || digit_count + point_count != unsigned.len() {
            return Err(TokenError::MalformedNumber(s.to_string()));
        }

        let value = s
            .parse::<f64>()
            .map_err(|_| TokenError::MalformedNumber(s.to_string()))?;

        Ok(Numeral {
            literal: s.to_string(),
            value,
        })
    }
}

/// One whitespace-delimited piece of the buffer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Numeral),
    Operator(Operator),
    ResultMarker,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    pub fn as_numeral(&self) -> Option<&Numeral> {
        match self {
            Token::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::ResultMarker => f.write_str("="),
        }
    }
}
