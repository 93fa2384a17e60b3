//! The three user intents the scoring machine accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-argument trigger bound to one interactive control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Perform the next element of the routine.
    Perform,
    /// Take the one-time deduction.
    Deduct,
    /// Start the routine over.
    Reset,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Perform, Action::Deduct, Action::Reset];

    /// Parse the single-character shorthand used by headless play
    /// (`p`, `d`, `r`, case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Perform),
            'd' => Some(Self::Deduct),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Perform => "perform",
            Self::Deduct => "deduct",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
