//! State trait and the routine scoring state.
//!
//! All state machine states implement [`State`], which provides pure
//! methods for inspecting state properties without side effects.
//! [`RoutineState`] is the single entity the scoring machine owns.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Highest score a routine can reach.
pub const MAX_SCORE: u8 = 20;

/// Number of elements in a full routine.
pub const ROUTINE_LENGTH: u8 = 10;

/// Points removed by a deduction.
pub const DEDUCTION_POINTS: u8 = 2;

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for restoration
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Score, progress and flags of one routine.
///
/// The value is plain data: it serializes to exactly four primitive
/// fields so a presentation layer can save and restore it across
/// reconfiguration. Mutation happens only through the transition
/// functions in [`crate::scoring`] or a validated checkpoint restore.
///
/// # Example
///
/// ```rust
/// use routine_score::core::{RoutineState, State};
///
/// let state = RoutineState::default();
/// assert_eq!(state.score(), 0);
/// assert_eq!(state.current_element(), 0);
/// assert_eq!(state.name(), "NotStarted");
/// assert!(!state.is_final());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutineState {
    pub(crate) score: u8,
    pub(crate) current_element: u8,
    pub(crate) deduction_taken: bool,
    pub(crate) routine_complete: bool,
}

impl RoutineState {
    /// Fresh routine: nothing performed, no deduction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from raw fields without checking invariants.
    ///
    /// Only checkpoint validation and tests should need this; anything
    /// coming from outside the process goes through
    /// [`Checkpoint::restore`](crate::checkpoint::Checkpoint::restore).
    pub fn from_parts(
        score: u8,
        current_element: u8,
        deduction_taken: bool,
        routine_complete: bool,
    ) -> Self {
        Self {
            score,
            current_element,
            deduction_taken,
            routine_complete,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Index of the last performed element, 0 before the first one.
    pub fn current_element(&self) -> u8 {
        self.current_element
    }

    pub fn deduction_taken(&self) -> bool {
        self.deduction_taken
    }

    pub fn is_routine_complete(&self) -> bool {
        self.routine_complete
    }
}

impl State for RoutineState {
    fn name(&self) -> &str {
        if self.routine_complete {
            "Complete"
        } else if self.deduction_taken {
            "Deducted"
        } else if self.current_element == 0 {
            "NotStarted"
        } else {
            "InProgress"
        }
    }

    fn is_final(&self) -> bool {
        self.routine_complete
    }
}
