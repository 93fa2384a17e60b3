//! Colors and styles for the terminal renderers.

use crate::scoring::ScoreBand;
use ratatui::style::{Color, Modifier, Style};

mod colors {
    use super::Color;

    pub const BLUE: Color = Color::Blue;
    pub const GREEN: Color = Color::Green;
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);

    pub const TEXT_PRIMARY: Color = Color::Reset;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Cyan;
}

/// Resolved palette used by both layouts.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub band_neutral: Color,
    pub band_opening: Color,
    pub band_middle: Color,
    pub band_closing: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            band_neutral: colors::TEXT_PRIMARY,
            band_opening: colors::BLUE,
            band_middle: colors::GREEN,
            band_closing: colors::ORANGE,
        }
    }
}

impl Palette {
    pub fn band(&self, band: ScoreBand) -> Color {
        match band {
            ScoreBand::Neutral => self.band_neutral,
            ScoreBand::Opening => self.band_opening,
            ScoreBand::Middle => self.band_middle,
            ScoreBand::Closing => self.band_closing,
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn score(&self, band: ScoreBand) -> Style {
        Style::default()
            .fg(self.band(band))
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn control(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.text_primary)
        } else {
            Style::default()
                .fg(self.text_muted)
                .add_modifier(Modifier::DIM)
        }
    }
}
