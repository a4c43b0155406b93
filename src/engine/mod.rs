//! Expression engine: the buffer state machine and its evaluation

mod core;
mod errors;
mod predicates;
mod reduce;

pub use self::core::{Engine, Outcome};
pub use errors::{ErrorCase, ReductionError};
pub use reduce::reduce;
