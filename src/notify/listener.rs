use crate::engine::{Engine, ErrorCase, Outcome};
use crate::keys::Key;
use crate::token::Operator;

/// Receives the screen text after accepted operations and the alert for
/// rejected ones. Implementations must not call back into the engine.
pub trait Listener {
    fn on_display_update(&mut self, current: &str);
    fn on_error(&mut self, title: &str, message: &str);
}

/// Wraps an [`Engine`] and forwards every outcome to a [`Listener`]
#[derive(Debug)]
pub struct NotifyingEngine<L: Listener> {
    engine: Engine,
    listener: L,
}

impl<L: Listener> NotifyingEngine<L> {
    pub fn new(listener: L) -> Self {
        Self {
            engine: Engine::new(),
            listener,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_parts(self) -> (Engine, L) {
        (self.engine, self.listener)
    }

    pub fn append_digits(&mut self, digits: &str) {
        let outcome = self.engine.append_digits(digits);
        self.forward(outcome);
    }

    pub fn append_decimal_point(&mut self) {
        let outcome = self.engine.append_decimal_point();
        self.forward(outcome);
    }

    pub fn append_operator(&mut self, op: Operator) {
        let outcome = self.engine.append_operator(op);
        self.forward(outcome);
    }

    pub fn append_operator_symbol(&mut self, symbol: &str) {
        let outcome = self.engine.append_operator_symbol(symbol);
        self.forward(outcome);
    }

    pub fn correction(&mut self) {
        let outcome = self.engine.correction();
        self.forward(outcome);
    }

    pub fn clear(&mut self) {
        let outcome = self.engine.clear();
        self.forward(outcome);
    }

    pub fn keep_result(&mut self) {
        let outcome = self.engine.keep_result();
        self.forward(outcome);
    }

    pub fn evaluate(&mut self) {
        let outcome = self.engine.evaluate();
        self.forward(outcome);
    }

    pub fn press(&mut self, key: Key) {
        let outcome = self.engine.press(key);
        self.forward(outcome);
    }

    fn forward(&mut self, outcome: Outcome) {
        match outcome {
            Ok(current) => self.listener.on_display_update(&current),
            Err(case) => self.alert(case),
        }
    }

    fn alert(&mut self, case: ErrorCase) {
        self.listener.on_error(case.title(), &case.message());
    }
}
