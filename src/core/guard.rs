//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a transition
//! may run. The scoring machine evaluates them before every intent, and
//! the presentation layer reads the same guards to enable or disable
//! its controls.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use routine_score::core::{Guard, RoutineState};
///
/// let started = Guard::new(|s: &RoutineState| s.current_element() > 0);
///
/// assert!(!started.check(&RoutineState::default()));
/// assert!(started.check(&RoutineState::from_parts(1, 1, false, false)));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Combine two guards; both must pass.
    pub fn and(self, other: Guard<S>) -> Self
    where
        S: 'static,
    {
        Guard::new(move |state: &S| self.check(state) && other.check(state))
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
