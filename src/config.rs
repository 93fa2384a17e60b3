//! Front-end configuration.
//!
//! Settings come from an optional JSON file and are overridden by any
//! command-line flag that was given explicitly.

use crate::view::{Locale, OrientationMode};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub orientation: OrientationMode,
    /// Where the routine is saved on exit and restored on start.
    pub state_file: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Command-line overrides for [`Config`].
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON config file
    #[arg(global = true, short, long)]
    pub config: Option<PathBuf>,

    #[arg(global = true, short, long, value_enum)]
    pub locale: Option<Locale>,

    #[arg(global = true, short, long, value_enum)]
    pub orientation: Option<OrientationMode>,

    /// Save the routine here on exit and restore it on start
    #[arg(global = true, short, long)]
    pub state_file: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the file named by `--config` (if any) and apply the flags on top.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let base = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        };
        Ok(self.apply(base))
    }

    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(orientation) = self.orientation {
            config.orientation = orientation;
        }
        if let Some(path) = &self.state_file {
            config.state_file = Some(path.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{ "locale": "es" }"#).unwrap();
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.orientation, OrientationMode::Auto);
        assert_eq!(config.state_file, None);
    }

    #[test]
    fn load_from_file_reads_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "orientation": "landscape", "state_file": "routine.json" }}"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.orientation, OrientationMode::Landscape);
        assert_eq!(config.state_file, Some(PathBuf::from("routine.json")));
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "locale = es").unwrap();

        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            Config::load_from_file("/definitely/not/here.json"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn flags_override_file_values() {
        let base = Config {
            locale: Locale::Es,
            orientation: OrientationMode::Portrait,
            state_file: None,
        };
        let args = ConfigArgs {
            orientation: Some(OrientationMode::Landscape),
            ..ConfigArgs::default()
        };

        let config = args.apply(base);
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.orientation, OrientationMode::Landscape);
    }
}
