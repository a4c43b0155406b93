use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyError {
    #[error("Unknown key '{key}' in '{word}'")]
    UnknownKey { key: char, word: String },
}
