//! Shared expansion flags.

use clap::Args;
use justscale_tuning::octave::{AUDIBLE_MAX_HZ, AUDIBLE_MIN_HZ, DEFAULT_CENT_DEVIATION};
use justscale_tuning::{AudibleRange, ExpandOptions};

/// Decimal places used when printing frequencies.
pub const DISPLAY_PRECISION: u32 = 5;

/// Flags controlling octave expansion, shared by `scale` and `expand`.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct ExpandArgs {
    /// Deduplication tolerance in cents (must be > 0)
    #[arg(long, default_value_t = DEFAULT_CENT_DEVIATION, allow_negative_numbers = true)]
    pub cents: f64,

    /// Lowest frequency to keep, in Hz
    #[arg(long, default_value_t = AUDIBLE_MIN_HZ, allow_negative_numbers = true)]
    pub min_hz: f64,

    /// Highest frequency to keep, in Hz
    #[arg(long, default_value_t = AUDIBLE_MAX_HZ, allow_negative_numbers = true)]
    pub max_hz: f64,
}

impl Default for ExpandArgs {
    fn default() -> Self {
        Self {
            cents: DEFAULT_CENT_DEVIATION,
            min_hz: AUDIBLE_MIN_HZ,
            max_hz: AUDIBLE_MAX_HZ,
        }
    }
}

impl From<ExpandArgs> for ExpandOptions {
    fn from(args: ExpandArgs) -> Self {
        ExpandOptions::with_cent_deviation(args.cents)
            .range(AudibleRange::new(args.min_hz, args.max_hz))
    }
}

/// Render frequencies as a bracketed list, e.g. `[20.625, 22.0]`.
pub fn format_frequencies(freqs: &[f64]) -> String {
    format!("{:?}", freqs)
}
