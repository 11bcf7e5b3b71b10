//! Error types for the tuning pipeline.

use thiserror::Error;

/// Result type for tuning operations.
pub type TuningResult<T> = Result<T, TuningError>;

/// Errors that can occur while resolving notes or expanding frequencies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// The normalized note name has no reference frequency.
    #[error("Please input a valid root note: [{}]", .valid_keys.join(", "))]
    InvalidNote {
        /// The note name as supplied by the caller.
        name: String,
        /// Every accepted key, sorted.
        valid_keys: Vec<&'static str>,
    },

    /// A numeric parameter is out of range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl TuningError {
    /// Creates an invalid note error listing the accepted keys.
    pub fn invalid_note(name: impl Into<String>, valid_keys: Vec<&'static str>) -> Self {
        Self::InvalidNote {
            name: name.into(),
            valid_keys,
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            TuningError::InvalidNote { .. } => "TUNING_001",
            TuningError::InvalidParameter { .. } => "TUNING_002",
        }
    }
}
