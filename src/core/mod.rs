//! Core state machine types.
//!
//! This module contains the pure data side of the scorer:
//! - State definitions via the `State` trait and the `RoutineState` value
//! - The three user intents (`Action`)
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in here performs I/O or logging.

mod action;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{RoutineState, State, DEDUCTION_POINTS, MAX_SCORE, ROUTINE_LENGTH};
