//! Save and restore of routine state.
//!
//! The presentation layer captures a [`Checkpoint`] before a reconfiguration
//! (or on exit) and restores it afterwards. The payload is exactly the four
//! [`RoutineState`] fields; the envelope adds a format version, an id and a
//! capture time. Restoring validates every invariant before handing the
//! state back.

use crate::core::RoutineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use tracing::debug;
use uuid::Uuid;

pub mod error;
pub mod validate;

pub use error::CheckpointError;
pub use validate::{validate_state, StateViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of one routine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// The routine state at capture time
    pub state: RoutineState,
}

impl Checkpoint {
    /// Capture `state` in a new checkpoint.
    pub fn capture(state: &RoutineState) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: *state,
        }
    }

    /// Check the version and the state invariants, returning the state.
    pub fn restore(&self) -> Result<RoutineState, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        match validate_state(&self.state) {
            Validation::Success(_) => Ok(self.state),
            Validation::Failure(errors) => Err(CheckpointError::InvalidState(
                errors.iter().cloned().collect(),
            )),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Write the checkpoint as JSON, replacing `path` atomically.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        fs::write(&temp, json)?;
        if let Err(err) = fs::rename(&temp, path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }

        debug!(path = %path.display(), id = %self.id, "checkpoint saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        let json = fs::read_to_string(path)?;
        let checkpoint = Self::from_json(&json)?;
        debug!(path = %path.display(), id = %checkpoint.id, "checkpoint loaded");
        Ok(checkpoint)
    }
}
