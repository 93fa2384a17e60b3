//! Invariant checks for restored routine state.
//!
//! Uses Stillwater's `Validation` so that a bad checkpoint reports every
//! broken invariant at once instead of the first one found.
//!
//! The accepted set is exactly the states the scoring operations can
//! produce: the score is fully determined by the element count and the
//! deduction flag, and a deduction stops the routine before completion.

use crate::core::{RoutineState, DEDUCTION_POINTS, MAX_SCORE, ROUTINE_LENGTH};
use crate::scoring::reachable_score;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single broken invariant in a restored state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("score {score} exceeds maximum {max}")]
    ScoreOutOfRange { score: u8, max: u8 },

    #[error("element {element} exceeds routine length {max}")]
    ElementOutOfRange { element: u8, max: u8 },

    #[error("completion flag is {complete} but element is {element}")]
    CompletionMismatch { element: u8, complete: bool },

    #[error("routine not started but score is {score} and deduction flag is {deduction_taken}")]
    NotStartedInconsistent { score: u8, deduction_taken: bool },

    #[error("score {score} does not match the {expected} points earned after {element} elements")]
    ScoreMismatch { score: u8, element: u8, expected: u8 },

    #[error("a deduction stops the routine, so it cannot also be complete")]
    DeductionAfterCompletion,
}

type Check = Validation<(), NonEmptyVec<StateViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> StateViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Score the operations produce for `element` performed elements,
/// with or without the deduction.
pub fn expected_score(element: u8, deduction_taken: bool) -> u8 {
    let earned = reachable_score(element);
    if deduction_taken {
        earned.saturating_sub(DEDUCTION_POINTS)
    } else {
        earned
    }
}

/// Validate every routine invariant, accumulating ALL violations.
pub fn validate_state(state: &RoutineState) -> Check {
    let score = state.score();
    let element = state.current_element();
    let complete = state.is_routine_complete();
    let deduction_taken = state.deduction_taken();
    let expected = expected_score(element, deduction_taken);

    let checks = vec![
        check(score <= MAX_SCORE, || StateViolation::ScoreOutOfRange {
            score,
            max: MAX_SCORE,
        }),
        check(element <= ROUTINE_LENGTH, || StateViolation::ElementOutOfRange {
            element,
            max: ROUTINE_LENGTH,
        }),
        check(complete == (element == ROUTINE_LENGTH), || {
            StateViolation::CompletionMismatch { element, complete }
        }),
        check(element > 0 || (score == 0 && !deduction_taken), || {
            StateViolation::NotStartedInconsistent {
                score,
                deduction_taken,
            }
        }),
        check(score == expected, || StateViolation::ScoreMismatch {
            score,
            element,
            expected,
        }),
        check(!(deduction_taken && complete), || {
            StateViolation::DeductionAfterCompletion
        }),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Convenience wrapper returning the violations as a plain list.
pub fn violations(state: &RoutineState) -> Vec<StateViolation> {
    match validate_state(state) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
