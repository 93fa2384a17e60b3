//! End-to-end checks of routine scoring through the public API and the CLI.

use routine_score::checkpoint::{Checkpoint, CheckpointError, StateViolation};
use routine_score::config::Config;
use routine_score::core::{Action, RoutineState};
use routine_score::scoring::{ScoringMachine, StepResult};
use routine_score::view::{Locale, OrientationMode, Orientation};
use routine_score::Session;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn tier_contributions_sum_to_twenty() {
    let mut machine = ScoringMachine::new();
    let mut gained = Vec::new();
    let mut last = 0;
    for _ in 0..10 {
        machine.perform_element();
        let score = machine.current_state().score();
        gained.push(score - last);
        last = score;
    }

    assert_eq!(gained[..3].iter().sum::<u8>(), 3);
    assert_eq!(gained[3..7].iter().sum::<u8>(), 8);
    assert_eq!(gained[7..].iter().sum::<u8>(), 9);
    assert_eq!(
        machine.current_state(),
        &RoutineState::from_parts(20, 10, false, true)
    );
}

#[test]
fn completed_routine_is_frozen() {
    let mut machine = ScoringMachine::new();
    for _ in 0..10 {
        machine.perform_element();
    }
    let done = *machine.current_state();

    assert_eq!(machine.perform_element(), StepResult::Ignored);
    assert_eq!(machine.apply_deduction(), StepResult::Ignored);
    assert_eq!(machine.current_state(), &done);
}

#[test]
fn deduction_at_one_point_floors_at_zero() {
    let mut machine = ScoringMachine::new();
    machine.perform_element();
    assert_eq!(machine.current_state().score(), 1);

    machine.apply_deduction();
    assert_eq!(machine.current_state().score(), 0);
    assert!(machine.current_state().deduction_taken());
}

#[test]
fn session_survives_orientation_change() {
    let mut session = Session::new(Config::default());
    session.handle(Action::Perform);
    session.handle(Action::Perform);

    let before = *session.state();
    assert_eq!(session.orientation(40, 40), Orientation::Portrait);
    assert_eq!(session.orientation(160, 40), Orientation::Landscape);
    assert_eq!(session.state(), &before);

    let portrait = session.view();
    let landscape = session.view();
    assert_eq!(portrait, landscape);
}

#[test]
fn forced_orientation_from_config() {
    let session = Session::new(Config {
        orientation: OrientationMode::Portrait,
        ..Config::default()
    });
    assert_eq!(session.orientation(300, 20), Orientation::Portrait);
}

#[test]
fn spanish_session_localizes_status() {
    let mut session = Session::new(Config {
        locale: Locale::Es,
        ..Config::default()
    });
    session.handle(Action::Perform);
    session.handle(Action::Deduct);

    let view = session.view();
    assert_eq!(view.status, Locale::Es.strings().deduction_taken);
    assert_eq!(view.score, "Puntuación: 0");
}

#[test]
fn tampered_checkpoint_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("routine.json");
    Checkpoint::capture(&RoutineState::from_parts(3, 3, false, false))
        .save(&path)
        .unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let tampered = json.replace("\"score\": 3", "\"score\": 19");
    std::fs::write(&path, tampered).unwrap();

    let checkpoint = Checkpoint::load(&path).unwrap();
    match checkpoint.restore() {
        Err(CheckpointError::InvalidState(violations)) => {
            assert_eq!(
                violations,
                vec![StateViolation::ScoreMismatch {
                    score: 19,
                    element: 3,
                    expected: 3
                }]
            );
        }
        other => panic!("Expected InvalidState, got {other:?}"),
    }
}

#[test]
fn cli_play_prints_view() {
    let output = Command::new(env!("CARGO_BIN_EXE_routine-score"))
        .args(["play", "ppppd"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Score: 3"), "{stdout}");
    assert!(stdout.contains("Element: 4/10"), "{stdout}");
    assert!(stdout.contains("[ ] Perform element"), "{stdout}");
    assert!(stdout.contains("[x] Reset"), "{stdout}");
}

#[test]
fn cli_play_resumes_from_state_file() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("routine.json");
    let state_arg = state.to_str().unwrap();

    let first = Command::new(env!("CARGO_BIN_EXE_routine-score"))
        .args(["--state-file", state_arg, "play", "ppp"])
        .output()
        .unwrap();
    assert!(first.status.success());

    let second = Command::new(env!("CARGO_BIN_EXE_routine-score"))
        .args(["--state-file", state_arg, "play", "p", "--json"])
        .output()
        .unwrap();
    assert!(second.status.success());

    let checkpoint = Checkpoint::from_json(&String::from_utf8(second.stdout).unwrap()).unwrap();
    assert_eq!(
        checkpoint.restore().unwrap(),
        RoutineState::from_parts(5, 4, false, false)
    );
}

#[test]
fn cli_play_keeps_rejected_state_file() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("routine.json");
    Checkpoint::capture(&RoutineState::from_parts(19, 3, false, false))
        .save(&state)
        .unwrap();
    let saved = std::fs::read_to_string(&state).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_routine-score"))
        .args(["--state-file", state.to_str().unwrap(), "play", "p"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ignoring saved routine"), "{stderr}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Score: 1"), "{stdout}");
    assert_eq!(std::fs::read_to_string(&state).unwrap(), saved);
}

#[test]
fn cli_rejects_unknown_action() {
    let output = Command::new(env!("CARGO_BIN_EXE_routine-score"))
        .args(["play", "pz"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn cli_inspect_reports_invalid_checkpoint() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    Checkpoint::capture(&RoutineState::from_parts(25, 3, false, false))
        .save(&path)
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_routine-score"))
        .arg("inspect")
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exceeds maximum"), "{stderr}");
}
