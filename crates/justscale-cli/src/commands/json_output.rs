//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; its stdout is then a single
//! [`JsonOutput`] document instead of colored text.

use justscale_tuning::TuningError;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Root note could not be resolved
    pub const INVALID_NOTE: &str = "CLI_001";
    /// Numeric option out of range
    pub const INVALID_PARAMETER: &str = "CLI_002";
    /// Root note could not be read from stdin
    pub const INPUT_READ: &str = "CLI_003";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&TuningError> for JsonError {
    fn from(err: &TuningError) -> Self {
        match err {
            TuningError::InvalidNote { valid_keys, .. } => {
                JsonError::new(error_codes::INVALID_NOTE, err.to_string())
                    .with_suggestion(format!("use one of: {}", valid_keys.join(" ")))
            }
            TuningError::InvalidParameter { .. } => {
                JsonError::new(error_codes::INVALID_PARAMETER, err.to_string())
            }
        }
    }
}

/// JSON envelope shared by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> JsonOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            anyhow::anyhow!("{}: failed to serialize output: {}", error_codes::JSON_SERIALIZE, e)
        })
    }
}

/// JSON result for the `scale` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleResult {
    /// Root note as typed
    pub root: String,
    /// Canonical key
    pub key: String,
    /// Tonic frequency in Hz
    pub tonic_hz: f64,
    /// One octave of scale frequencies
    pub scale: Vec<f64>,
    /// Cent deviation used for deduplication
    pub cent_deviation: f64,
    /// Audible frequencies, ascending, rounded for display
    pub audible: Vec<f64>,
    /// Number of audible frequencies
    pub count: usize,
}

/// JSON result for the `expand` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandResult {
    /// Input frequencies
    pub inputs: Vec<f64>,
    /// Cent deviation used for deduplication
    pub cent_deviation: f64,
    /// Audible frequencies, ascending, rounded for display
    pub audible: Vec<f64>,
    /// Number of audible frequencies
    pub count: usize,
}

/// JSON result for the `keys` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysResult {
    /// Accepted keys with their reference frequency
    pub keys: Vec<KeyEntry>,
}

/// A single accepted key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyEntry {
    /// Key spelling
    pub key: String,
    /// Reference frequency in Hz
    pub hz: f64,
}
