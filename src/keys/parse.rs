use log::debug;

use crate::keys::errors::KeyError;
use crate::keys::types::Key;
use crate::token::Operator;

/// Reads a key sequence such as `"40 + 6 x 9.3 ÷ 2 ="` or `"12+3=K"`.
///
/// Whole words `AC`, `C`, `DEL` and `KEEP` name the action keys; any other
/// word is read one character at a time.
///
/// # Errors
///
/// Returns an error on the first character that is not a keypad key.
pub fn parse_keys(text: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();

    for word in text.split_whitespace() {
        match word.to_ascii_uppercase().as_str() {
            "AC" => keys.push(Key::AllClear),
            "C" | "DEL" => keys.push(Key::Correction),
            "KEEP" => keys.push(Key::Keep),
            _ => {
                for c in word.chars() {
                    let key = key_for_char(c).ok_or_else(|| KeyError::UnknownKey {
                        key: c,
                        word: word.to_string(),
                    })?;
                    keys.push(key);
                }
            }
        }
    }

    debug!("Parsed {} keys from '{}'", keys.len(), text);
    Ok(keys)
}

fn key_for_char(c: char) -> Option<Key> {
    let key = match c {
        '0'..='9' => Key::Digit(c as u8 - b'0'),
        '.' => Key::Point,
        '+' => Key::Operator(Operator::Add),
        '-' => Key::Operator(Operator::Subtract),
        'x' | 'X' | '*' | '×' => Key::Operator(Operator::Multiply),
        '÷' | '/' => Key::Operator(Operator::Divide),
        '=' => Key::Equals,
        'k' | 'K' => Key::Keep,
        '<' => Key::Correction,
        _ => return None,
    };
    Some(key)
}
