//! Key bindings for the terminal front end.

use crate::core::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Act(Action),
    Quit,
}

/// Map a key event to an intent. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Intent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Enter => Some(Intent::Act(Action::Perform)),
        KeyCode::Char(c) => Action::from_char(c).map(Intent::Act),
        _ => None,
    }
}
