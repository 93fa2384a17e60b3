//! State machine that applies user intents to a routine.

use crate::core::{Action, Guard, RoutineState, State, StateHistory, StateTransition};
use crate::scoring::transition;
use chrono::Utc;
use tracing::{debug, trace};

/// Outcome of dispatching one intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The intent changed (or, for reset, re-initialized) the state.
    Transitioned(RoutineState),

    /// The precondition did not hold; nothing changed.
    Ignored,
}

impl StepResult {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }
}

/// Scoring state machine for one routine.
///
/// All operations are synchronous and total: an intent whose guard fails
/// is reported as [`StepResult::Ignored`] and leaves the state untouched.
///
/// # Example
///
/// ```rust
/// use routine_score::scoring::{ScoringMachine, StepResult};
///
/// let mut machine = ScoringMachine::new();
/// assert!(machine.perform_element().is_transitioned());
/// assert_eq!(machine.current_state().score(), 1);
///
/// machine.apply_deduction();
/// assert_eq!(machine.current_state().score(), 0);
/// assert_eq!(machine.perform_element(), StepResult::Ignored);
/// ```
#[derive(Debug)]
pub struct ScoringMachine {
    current: RoutineState,
    perform_guard: Guard<RoutineState>,
    deduction_guard: Guard<RoutineState>,
    history: StateHistory<RoutineState>,
}

impl Default for ScoringMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringMachine {
    /// Create a machine at the start of a routine.
    pub fn new() -> Self {
        Self::from_state(RoutineState::default())
    }

    /// Create a machine resuming from an already validated state.
    pub fn from_state(state: RoutineState) -> Self {
        Self {
            current: state,
            perform_guard: Guard::new(transition::can_perform),
            deduction_guard: Guard::new(transition::can_deduct),
            history: StateHistory::new(),
        }
    }

    pub fn current_state(&self) -> &RoutineState {
        &self.current
    }

    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Transitions since the machine was created or last reset.
    pub fn history(&self) -> &StateHistory<RoutineState> {
        &self.history
    }

    pub fn can_perform(&self) -> bool {
        self.perform_guard.check(&self.current)
    }

    pub fn can_deduct(&self) -> bool {
        self.deduction_guard.check(&self.current)
    }

    /// Whether `action` would currently change the state.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Perform => self.can_perform(),
            Action::Deduct => self.can_deduct(),
            Action::Reset => true,
        }
    }

    /// Route an intent to its operation.
    pub fn dispatch(&mut self, action: Action) -> StepResult {
        match action {
            Action::Perform => self.perform_element(),
            Action::Deduct => self.apply_deduction(),
            Action::Reset => self.reset(),
        }
    }

    /// Perform the next element.
    pub fn perform_element(&mut self) -> StepResult {
        let Some(next) = transition::perform(&self.current) else {
            trace!(state = self.current.name(), "perform ignored");
            return StepResult::Ignored;
        };
        self.apply(Action::Perform, next);
        debug!(
            element = next.current_element(),
            score = next.score(),
            complete = next.is_routine_complete(),
            "element performed"
        );
        StepResult::Transitioned(next)
    }

    /// Take the one-time deduction.
    pub fn apply_deduction(&mut self) -> StepResult {
        let Some(next) = transition::deduct(&self.current) else {
            trace!(state = self.current.name(), "deduction ignored");
            return StepResult::Ignored;
        };
        self.apply(Action::Deduct, next);
        debug!(
            element = next.current_element(),
            score = next.score(),
            "deduction applied"
        );
        StepResult::Transitioned(next)
    }

    /// Start the routine over. Always succeeds and clears the history.
    pub fn reset(&mut self) -> StepResult {
        self.current = transition::reset();
        self.history = StateHistory::new();
        debug!("routine reset");
        StepResult::Transitioned(self.current)
    }

    fn apply(&mut self, action: Action, next: RoutineState) {
        self.history = self.history.record(StateTransition {
            from: self.current,
            to: next,
            action,
            timestamp: Utc::now(),
        });
        self.current = next;
    }
}
