//! End-to-end pipeline from a root note name to audible frequencies.

use serde::{Deserialize, Serialize};

use crate::error::TuningResult;
use crate::note::lookup;
use crate::octave::{expand_to_audible, ExpandOptions};
use crate::scale::generate_scale;

/// Everything computed for one root note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleReport {
    /// Root note exactly as supplied.
    pub root: String,
    /// Canonical key the root resolved to.
    pub key: String,
    /// Equal-temperament tonic frequency in Hz.
    pub tonic_hz: f64,
    /// One octave of just-intonation frequencies, in ratio order.
    pub scale: Vec<f64>,
    /// Options used for the octave expansion.
    pub options: ExpandOptions,
    /// Deduplicated audible frequencies, ascending.
    pub audible: Vec<f64>,
}

impl ScaleReport {
    /// Runs the full pipeline for `root_note`.
    pub fn build(root_note: &str, options: &ExpandOptions) -> TuningResult<Self> {
        let (key, tonic_hz) = lookup(root_note)?;
        let scale = generate_scale(tonic_hz).to_vec();
        let audible = expand_to_audible(&scale, options)?;

        Ok(Self {
            root: root_note.to_string(),
            key: key.to_string(),
            tonic_hz,
            scale,
            options: *options,
            audible,
        })
    }

    /// Number of audible frequencies.
    pub fn count(&self) -> usize {
        self.audible.len()
    }

    /// Audible frequencies rounded to `places` decimal places.
    pub fn rounded_audible(&self, places: u32) -> Vec<f64> {
        self.audible.iter().map(|f| round_to(*f, places)).collect()
    }
}

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
