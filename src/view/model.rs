//! View model shared by both layouts.

use crate::core::{Action, RoutineState, ROUTINE_LENGTH};
use crate::scoring::transition::{can_deduct, can_perform};
use crate::scoring::ScoreBand;
use crate::view::strings::Locale;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Screen arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Everything stacked in one column.
    Portrait,
    /// Info column on the left, controls on the right.
    Landscape,
}

impl Orientation {
    /// Terminal cells are roughly twice as tall as they are wide, so a
    /// terminal counts as landscape once it is at least twice as many
    /// columns as rows.
    pub fn from_size(width: u16, height: u16) -> Self {
        if u32::from(width) >= 2 * u32::from(height) {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// How the orientation is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrientationMode {
    /// Follow the terminal size.
    #[default]
    Auto,
    Portrait,
    Landscape,
}

impl OrientationMode {
    pub fn resolve(&self, width: u16, height: u16) -> Orientation {
        match self {
            Self::Auto => Orientation::from_size(width, height),
            Self::Portrait => Orientation::Portrait,
            Self::Landscape => Orientation::Landscape,
        }
    }
}

/// Enabled flags for the three controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub perform: bool,
    pub deduct: bool,
    pub reset: bool,
}

impl Controls {
    pub fn for_state(state: &RoutineState) -> Self {
        Self {
            perform: can_perform(state),
            deduct: can_deduct(state),
            reset: true,
        }
    }

    pub fn enabled(&self, action: Action) -> bool {
        match action {
            Action::Perform => self.perform,
            Action::Deduct => self.deduct,
            Action::Reset => self.reset,
        }
    }
}

/// Everything a renderer needs, already localized.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutineView {
    pub title: String,
    pub score: String,
    pub element: String,
    /// Completion wins over the deduction message; empty otherwise.
    pub status: String,
    pub band: ScoreBand,
    pub controls: Controls,
    pub locale: Locale,
}

impl RoutineView {
    pub fn new(state: &RoutineState, locale: Locale) -> Self {
        let strings = locale.strings();
        let status = if state.is_routine_complete() {
            strings.routine_complete
        } else if state.deduction_taken() {
            strings.deduction_taken
        } else {
            ""
        };

        Self {
            title: strings.app_title.to_string(),
            score: locale.score_label(state.score()),
            element: locale.element_label(state.current_element(), ROUTINE_LENGTH),
            status: status.to_string(),
            band: ScoreBand::for_element(state.current_element()),
            controls: Controls::for_state(state),
            locale,
        }
    }

    /// Button label for `action`.
    pub fn label(&self, action: Action) -> &'static str {
        let strings = self.locale.strings();
        match action {
            Action::Perform => strings.perform_button,
            Action::Deduct => strings.deduction_button,
            Action::Reset => strings.reset_button,
        }
    }

    /// Plain-text rendering for headless output.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), self.score.clone(), self.element.clone()];
        if !self.status.is_empty() {
            lines.push(self.status.clone());
        }
        for action in Action::ALL {
            let mark = if self.controls.enabled(action) { "x" } else { " " };
            lines.push(format!("[{mark}] {}", self.label(action)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_terminal_size() {
        assert_eq!(Orientation::from_size(80, 24), Orientation::Landscape);
        assert_eq!(Orientation::from_size(40, 40), Orientation::Portrait);
        assert_eq!(Orientation::from_size(48, 24), Orientation::Landscape);
        assert_eq!(Orientation::from_size(47, 24), Orientation::Portrait);
    }

    #[test]
    fn forced_mode_ignores_size() {
        assert_eq!(OrientationMode::Portrait.resolve(200, 10), Orientation::Portrait);
        assert_eq!(OrientationMode::Landscape.resolve(10, 200), Orientation::Landscape);
        assert_eq!(OrientationMode::Auto.resolve(10, 200), Orientation::Portrait);
    }

    #[test]
    fn initial_view_enables_perform_and_reset_only() {
        let view = RoutineView::new(&RoutineState::default(), Locale::En);

        assert_eq!(view.score, "Score: 0");
        assert_eq!(view.element, "Element: 0/10");
        assert_eq!(view.status, "");
        assert_eq!(view.band, ScoreBand::Neutral);
        assert_eq!(
            view.controls,
            Controls {
                perform: true,
                deduct: false,
                reset: true
            }
        );
    }

    #[test]
    fn deduction_disables_both_scoring_controls() {
        let view = RoutineView::new(&RoutineState::from_parts(3, 4, true, false), Locale::En);

        assert_eq!(view.status, Locale::En.strings().deduction_taken);
        assert!(!view.controls.perform);
        assert!(!view.controls.deduct);
        assert!(view.controls.reset);
        assert_eq!(view.band, ScoreBand::Middle);
    }

    #[test]
    fn completion_message_wins() {
        let view = RoutineView::new(&RoutineState::from_parts(20, 10, false, true), Locale::Es);
        assert_eq!(view.status, Locale::Es.strings().routine_complete);
        assert_eq!(view.band, ScoreBand::Closing);
    }

    #[test]
    fn text_lines_mark_enabled_controls() {
        let view = RoutineView::new(&RoutineState::from_parts(1, 1, false, false), Locale::En);
        let lines = view.text_lines();

        assert_eq!(lines[1], "Score: 1");
        assert!(lines.contains(&"[x] Perform element".to_string()));
        assert!(lines.contains(&"[x] Apply deduction".to_string()));
        assert!(lines.contains(&"[x] Reset".to_string()));
    }
}
