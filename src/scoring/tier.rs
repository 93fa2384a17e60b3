//! Element tiers and the score band derived from routine progress.

use crate::core::{MAX_SCORE, ROUTINE_LENGTH};
use serde::{Deserialize, Serialize};

/// Difficulty tier of an element, keyed by its 1-based position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementTier {
    /// Elements 1-3.
    Opening,
    /// Elements 4-7.
    Middle,
    /// Elements 8-10.
    Closing,
}

impl ElementTier {
    pub fn for_element(element: u8) -> Option<Self> {
        match element {
            1..=3 => Some(Self::Opening),
            4..=7 => Some(Self::Middle),
            8..=10 => Some(Self::Closing),
            _ => None,
        }
    }

    /// Points awarded for performing an element of this tier.
    pub fn points(&self) -> u8 {
        match self {
            Self::Opening => 1,
            Self::Middle => 2,
            Self::Closing => 3,
        }
    }
}

/// Highest score reachable after `elements` performed elements with no
/// deduction, clamped to [`MAX_SCORE`].
pub fn reachable_score(elements: u8) -> u8 {
    let total: u8 = (1..=elements.min(ROUTINE_LENGTH))
        .filter_map(ElementTier::for_element)
        .map(|tier| tier.points())
        .sum();
    total.min(MAX_SCORE)
}

/// Display band for the score, a pure function of the current element.
///
/// Carries no state; renderers map each band to a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    Neutral,
    Opening,
    Middle,
    Closing,
}

impl ScoreBand {
    pub fn for_element(element: u8) -> Self {
        match ElementTier::for_element(element) {
            Some(ElementTier::Opening) => Self::Opening,
            Some(ElementTier::Middle) => Self::Middle,
            Some(ElementTier::Closing) => Self::Closing,
            None => Self::Neutral,
        }
    }
}
