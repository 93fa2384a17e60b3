//! Localized display strings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Fixed strings for one locale. Labels with a number are formatted by
/// the methods on [`Locale`].
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    score_label: &'static str,
    element_label: &'static str,
    pub routine_complete: &'static str,
    pub deduction_taken: &'static str,
    pub perform_button: &'static str,
    pub deduction_button: &'static str,
    pub reset_button: &'static str,
    pub quit_hint: &'static str,
}

const EN: Strings = Strings {
    app_title: "Gymnastics Routine Scorer",
    score_label: "Score",
    element_label: "Element",
    routine_complete: "Routine complete!",
    deduction_taken: "Deduction taken. Routine stopped.",
    perform_button: "Perform element",
    deduction_button: "Apply deduction",
    reset_button: "Reset",
    quit_hint: "q: quit",
};

const ES: Strings = Strings {
    app_title: "Puntuación de rutina de gimnasia",
    score_label: "Puntuación",
    element_label: "Elemento",
    routine_complete: "¡Rutina completada!",
    deduction_taken: "Deducción aplicada. Rutina detenida.",
    perform_button: "Realizar elemento",
    deduction_button: "Aplicar deducción",
    reset_button: "Reiniciar",
    quit_hint: "q: salir",
};

impl Locale {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }

    pub fn score_label(&self, score: u8) -> String {
        format!("{}: {score}", self.strings().score_label)
    }

    pub fn element_label(&self, element: u8, total: u8) -> String {
        format!("{}: {element}/{total}", self.strings().element_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_include_values() {
        assert_eq!(Locale::En.score_label(14), "Score: 14");
        assert_eq!(Locale::En.element_label(8, 10), "Element: 8/10");
        assert_eq!(Locale::Es.score_label(3), "Puntuación: 3");
    }

    #[test]
    fn every_locale_has_distinct_buttons() {
        for locale in Locale::value_variants() {
            let s = locale.strings();
            assert_ne!(s.perform_button, s.deduction_button);
            assert_ne!(s.deduction_button, s.reset_button);
            assert!(!s.app_title.is_empty());
        }
    }

    #[test]
    fn locale_deserializes_lowercase() {
        let locale: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(locale, Locale::Es);
    }
}
