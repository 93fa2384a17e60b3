//! State transition history tracking.
//!
//! Keeps an immutable, ordered record of the effective transitions of one
//! routine. Ignored intents never appear here.

use super::action::Action;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use routine_score::core::{Action, RoutineState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: RoutineState::default(),
///     to: RoutineState::from_parts(1, 1, false, false),
///     action: Action::Perform,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.action, Action::Perform);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The intent that caused the transition
    pub action: Action,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use routine_score::core::{Action, RoutineState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let start = RoutineState::default();
/// let first = RoutineState::from_parts(1, 1, false, false);
///
/// let history = StateHistory::new().record(StateTransition {
///     from: start,
///     to: first,
///     action: Action::Perform,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&start, &first]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of recorded transitions caused by `action`.
    pub fn count(&self, action: Action) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.action == action)
            .count()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
