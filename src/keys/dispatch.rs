use crate::engine::{Engine, Outcome};
use crate::keys::types::Key;

impl Engine {
    /// Runs the operation bound to a keypad key
    pub fn press(&mut self, key: Key) -> Outcome {
        match key {
            Key::Digit(d) => self.append_digits(&d.to_string()),
            Key::Point => self.append_decimal_point(),
            Key::Operator(op) => self.append_operator(op),
            Key::Equals => self.evaluate(),
            Key::Correction => self.correction(),
            Key::AllClear => self.clear(),
            Key::Keep => self.keep_result(),
        }
    }
}
