//! Core state machine building blocks.
//!
//! - State definitions via the `State` trait
//! - Guard predicates for transition control
//! - Ordered history of taken transitions
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
