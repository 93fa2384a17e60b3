//! Checkpoint error types.

use crate::checkpoint::validate::StateViolation;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Restored state breaks one or more routine invariants
    #[error("Checkpoint state is invalid: {}", format_violations(.0))]
    InvalidState(Vec<StateViolation>),

    #[error("Checkpoint I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

fn format_violations(violations: &[StateViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
