//! Adapter that reports engine outcomes to display and alert callbacks

mod listener;

pub use listener::{Listener, NotifyingEngine};
