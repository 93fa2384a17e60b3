//! Pure transition functions over [`RoutineState`].
//!
//! Each function returns the next state, or `None` when the precondition
//! does not hold. A `None` is a no-op, never an error.

use crate::core::{RoutineState, DEDUCTION_POINTS, MAX_SCORE, ROUTINE_LENGTH};
use crate::scoring::tier::ElementTier;

/// Whether another element may be performed from `state`.
pub fn can_perform(state: &RoutineState) -> bool {
    !state.deduction_taken && !state.routine_complete && state.score < MAX_SCORE
}

/// Whether the deduction may be taken from `state`.
///
/// A deduction is allowed once per routine, after the first element and
/// before completion.
pub fn can_deduct(state: &RoutineState) -> bool {
    state.current_element > 0 && !state.routine_complete && !state.deduction_taken
}

/// Advance to the next element, adding the points of its tier.
pub fn perform(state: &RoutineState) -> Option<RoutineState> {
    if !can_perform(state) {
        return None;
    }

    let element = state.current_element + 1;
    let points = ElementTier::for_element(element).map_or(0, |tier| tier.points());
    let score = state.score.saturating_add(points).min(MAX_SCORE);

    Some(RoutineState {
        score,
        current_element: element,
        routine_complete: element == ROUTINE_LENGTH,
        ..*state
    })
}

/// Subtract the deduction, flooring the score at zero.
pub fn deduct(state: &RoutineState) -> Option<RoutineState> {
    if !can_deduct(state) {
        return None;
    }

    Some(RoutineState {
        score: state.score.saturating_sub(DEDUCTION_POINTS),
        deduction_taken: true,
        ..*state
    })
}

pub fn reset() -> RoutineState {
    RoutineState::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_perform_scores_one_point() {
        let next = perform(&RoutineState::default()).unwrap();
        assert_eq!(next, RoutineState::from_parts(1, 1, false, false));
    }

    #[test]
    fn full_routine_reaches_twenty_and_completes() {
        let mut state = RoutineState::default();
        let mut scores = Vec::new();
        while let Some(next) = perform(&state) {
            state = next;
            scores.push(state.score());
        }

        assert_eq!(scores, [1, 2, 3, 5, 7, 9, 11, 14, 17, 20]);
        assert_eq!(state.current_element(), 10);
        assert!(state.is_routine_complete());
    }

    #[test]
    fn perform_is_blocked_after_deduction() {
        let state = RoutineState::from_parts(0, 1, true, false);
        assert_eq!(perform(&state), None);
    }

    #[test]
    fn perform_is_blocked_at_max_score() {
        let state = RoutineState::from_parts(20, 9, false, false);
        assert_eq!(perform(&state), None);
    }

    #[test]
    fn perform_clamps_to_max_score() {
        let state = RoutineState::from_parts(19, 9, false, false);
        let next = perform(&state).unwrap();
        assert_eq!(next.score(), 20);
        assert!(next.is_routine_complete());
    }

    #[test]
    fn deduct_requires_started_routine() {
        assert_eq!(deduct(&RoutineState::default()), None);
    }

    #[test]
    fn deduct_floors_at_zero() {
        let state = RoutineState::from_parts(1, 1, false, false);
        let next = deduct(&state).unwrap();
        assert_eq!(next, RoutineState::from_parts(0, 1, true, false));
    }

    #[test]
    fn deduct_applies_once() {
        let state = RoutineState::from_parts(9, 6, false, false);
        let once = deduct(&state).unwrap();
        assert_eq!(once.score(), 7);
        assert_eq!(deduct(&once), None);
    }

    #[test]
    fn deduct_is_blocked_after_completion() {
        let state = RoutineState::from_parts(20, 10, false, true);
        assert_eq!(deduct(&state), None);
    }

    #[test]
    fn reset_returns_initial_state() {
        assert_eq!(reset(), RoutineState::default());
    }
}
