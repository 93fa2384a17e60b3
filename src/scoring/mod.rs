//! Scoring rules and the state machine that applies them.
//!
//! The transition functions are pure; [`ScoringMachine`] is the thin shell
//! that owns the current state, evaluates guards, records history and emits
//! the diagnostic trace.

mod machine;
pub mod tier;
pub mod transition;

pub use machine::{ScoringMachine, StepResult};
pub use tier::{reachable_score, ElementTier, ScoreBand};
