//! Octave expansion across the audible range with cents-based deduplication.
//!
//! Every input frequency is shifted by whole octaves until it covers the
//! audible range. Candidates are then quantized into buckets of
//! `cent_deviation` cents (relative to 1 Hz); only the first candidate that
//! lands in a given bucket is kept.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{TuningError, TuningResult};

/// Lowest audible frequency in Hz.
pub const AUDIBLE_MIN_HZ: f64 = 20.0;

/// Highest audible frequency in Hz.
pub const AUDIBLE_MAX_HZ: f64 = 20000.0;

/// Default deduplication tolerance in cents.
pub const DEFAULT_CENT_DEVIATION: f64 = 0.5;

/// Cents per octave.
pub const CENTS_PER_OCTAVE: f64 = 1200.0;

/// Reference frequency that bucket values are measured from.
const CENTS_REFERENCE_HZ: f64 = 1.0;

/// Inclusive frequency window that expanded candidates must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudibleRange {
    /// Lower bound in Hz (inclusive).
    pub min_hz: f64,
    /// Upper bound in Hz (inclusive).
    pub max_hz: f64,
}

impl Default for AudibleRange {
    fn default() -> Self {
        Self {
            min_hz: AUDIBLE_MIN_HZ,
            max_hz: AUDIBLE_MAX_HZ,
        }
    }
}

impl AudibleRange {
    /// Creates a range from explicit bounds.
    pub fn new(min_hz: f64, max_hz: f64) -> Self {
        Self { min_hz, max_hz }
    }

    /// Returns true if `freq` lies within the range.
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.min_hz && freq <= self.max_hz
    }

    /// Inclusive range of octave shifts `k` that put `freq * 2^k` inside the range.
    ///
    /// `freq` must be finite and strictly positive. The result is empty when no
    /// shift fits.
    pub fn octave_shifts(&self, freq: f64) -> std::ops::RangeInclusive<i32> {
        let k_min = octaves_between(freq, self.min_hz).ceil() as i32;
        let k_max = octaves_between(freq, self.max_hz).floor() as i32;
        k_min..=k_max
    }

    fn validate(&self) -> TuningResult<()> {
        if !(self.min_hz.is_finite() && self.min_hz > 0.0) {
            return Err(TuningError::invalid_param(
                "min_hz",
                format!("must be a finite value > 0 (got {})", self.min_hz),
            ));
        }
        if !(self.max_hz.is_finite() && self.max_hz >= self.min_hz) {
            return Err(TuningError::invalid_param(
                "max_hz",
                format!(
                    "must be a finite value >= min_hz {} (got {})",
                    self.min_hz, self.max_hz
                ),
            ));
        }
        Ok(())
    }
}

/// Options for [`expand_to_audible`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    /// Width of a deduplication bucket in cents. Must be > 0.
    pub cent_deviation: f64,
    /// Frequency window for expanded candidates.
    pub range: AudibleRange,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            cent_deviation: DEFAULT_CENT_DEVIATION,
            range: AudibleRange::default(),
        }
    }
}

impl ExpandOptions {
    /// Default options with a custom cent deviation.
    pub fn with_cent_deviation(cent_deviation: f64) -> Self {
        Self {
            cent_deviation,
            ..Self::default()
        }
    }

    /// Sets the frequency window.
    pub fn range(mut self, range: AudibleRange) -> Self {
        self.range = range;
        self
    }

    /// Checks that every option is usable.
    pub fn validate(&self) -> TuningResult<()> {
        // NaN fails the comparison and is rejected along with non-positive values.
        if !(self.cent_deviation > 0.0) {
            return Err(TuningError::invalid_param(
                "cent_deviation",
                format!("must be > 0 (got {})", self.cent_deviation),
            ));
        }
        self.range.validate()
    }
}

/// `log2(bound / freq)`, the number of octaves from `freq` up to `bound`.
///
/// The quotient overflows or goes subnormal when `freq` sits near either end
/// of the f64 range; the difference of logarithms is used there instead.
fn octaves_between(freq: f64, bound: f64) -> f64 {
    let ratio = bound / freq;
    if ratio.is_normal() {
        ratio.log2()
    } else {
        bound.log2() - freq.log2()
    }
}

/// `freq * 2^k` without overflowing the intermediate power of two.
///
/// `2^k` alone is infinite past k = 1023 even when the product is in range,
/// so large shifts are applied in steps.
pub fn shift_octaves(freq: f64, k: i32) -> f64 {
    const STEP: i32 = 1000;

    let mut value = freq;
    let mut remaining = k;
    while remaining > STEP {
        value *= 2f64.powi(STEP);
        remaining -= STEP;
    }
    while remaining < -STEP {
        value *= 2f64.powi(-STEP);
        remaining += STEP;
    }
    value * 2f64.powi(remaining)
}

/// Discretized pitch of `freq`: cents above 1 Hz divided by the bucket width.
///
/// Two frequencies are perceptually identical when their buckets are equal.
/// Ties round to even.
pub fn cents_bucket(freq: f64, cent_deviation: f64) -> i64 {
    let cents_factor = CENTS_PER_OCTAVE / cent_deviation;
    (cents_factor * (freq / CENTS_REFERENCE_HZ).log2()).round_ties_even() as i64
}

/// Expand frequencies into every octave inside the configured range.
///
/// Non-positive inputs, negative infinity included, are skipped. Candidates
/// are visited in input order and, for each input, in ascending octave order;
/// the first candidate to claim a cents bucket wins. The result is sorted
/// ascending.
///
/// # Errors
/// Returns [`TuningError::InvalidParameter`] if the options are invalid or
/// an input frequency is NaN or positive infinity.
///
/// # Examples
/// ```
/// use justscale_tuning::octave::{expand_to_audible, ExpandOptions};
///
/// let freqs = expand_to_audible(&[440.0], &ExpandOptions::default()).unwrap();
/// assert_eq!(freqs.first(), Some(&27.5));
/// assert_eq!(freqs.last(), Some(&14080.0));
/// ```
pub fn expand_to_audible(freqs: &[f64], options: &ExpandOptions) -> TuningResult<Vec<f64>> {
    options.validate()?;

    let mut results = Vec::new();
    let mut seen_buckets = HashSet::new();
    let mut discarded = 0usize;

    for (index, &freq) in freqs.iter().enumerate() {
        if freq <= 0.0 {
            trace!(freq, "skipping non-positive frequency");
            continue;
        }
        if !freq.is_finite() {
            return Err(TuningError::invalid_param(
                "freqs",
                format!("must be finite (got {} at index {})", freq, index),
            ));
        }

        for k in options.range.octave_shifts(freq) {
            let candidate = shift_octaves(freq, k);
            let bucket = cents_bucket(candidate, options.cent_deviation);

            if seen_buckets.insert(bucket) {
                results.push(candidate);
            } else {
                trace!(candidate, bucket, "discarding perceptual duplicate");
                discarded += 1;
            }
        }
    }

    results.sort_by(f64::total_cmp);

    debug!(
        inputs = freqs.len(),
        kept = results.len(),
        discarded,
        cent_deviation = options.cent_deviation,
        "expanded frequencies across audible range"
    );

    Ok(results)
}

/// Expand frequencies across 20 Hz..=20 kHz with the given cent tolerance.
///
/// Use [`DEFAULT_CENT_DEVIATION`] for the standard half-cent tolerance.
pub fn audible_octaves(freqs: &[f64], cent_deviation: f64) -> TuningResult<Vec<f64>> {
    expand_to_audible(freqs, &ExpandOptions::with_cent_deviation(cent_deviation))
}
