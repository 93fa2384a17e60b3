//! Routine Score: a deterministic scorer for ten-element gymnastics routines.
//!
//! The scoring core is a small state machine over [`RoutineState`]: perform
//! the next element, take a one-time deduction, or reset. Transitions are
//! pure functions; [`ScoringMachine`] wraps them with guards, history and
//! a diagnostic trace.
//!
//! # Core Concepts
//!
//! - **State**: `RoutineState` (score, element, deduction flag, completion flag)
//! - **Guards**: Pure predicates shared by the machine and the controls
//! - **Checkpoint**: Validated save/restore of the four state fields
//! - **View**: One view model, two layouts (portrait and landscape)
//!
//! # Example
//!
//! ```rust
//! use routine_score::{Action, ScoringMachine};
//!
//! let mut machine = ScoringMachine::new();
//! for _ in 0..10 {
//!     machine.dispatch(Action::Perform);
//! }
//!
//! let state = machine.current_state();
//! assert_eq!(state.score(), 20);
//! assert!(state.is_routine_complete());
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod scoring;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{Config, ConfigError};
pub use self::core::{Action, RoutineState, State};
pub use scoring::{ScoringMachine, StepResult};
pub use session::Session;
