//! justscale tuning core - just-intonation scales across the audible range
//!
//! This crate resolves a root note name to an equal-temperament tonic
//! (A4 = 440 Hz), builds one octave of a just-intonation scale on it, and
//! expands that octave across 20 Hz..=20 kHz with perceptual deduplication.
//!
//! All operations are pure and deterministic: the same input always yields
//! byte-identical output, and no state is shared between calls.
//!
//! # Example
//!
//! ```
//! use justscale_tuning::{audible_octaves, just_intonation_scale, DEFAULT_CENT_DEVIATION};
//!
//! let scale = just_intonation_scale("Eb")?;
//! let audible = audible_octaves(&scale, DEFAULT_CENT_DEVIATION)?;
//!
//! assert!(audible.windows(2).all(|w| w[0] < w[1]));
//! assert!(audible.iter().all(|f| (20.0..=20000.0).contains(f)));
//! # Ok::<(), justscale_tuning::TuningError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`note`]: Note name normalization and tonic lookup
//! - [`scale`]: Just-intonation scale generation
//! - [`octave`]: Octave expansion and cents-bucket deduplication
//! - [`pipeline`]: Whole-pipeline report used by front ends

pub mod error;
pub mod note;
pub mod octave;
pub mod pipeline;
pub mod scale;

pub use error::{TuningError, TuningResult};
pub use note::{normalize_note, resolve_tonic, valid_keys};
pub use octave::{
    audible_octaves, expand_to_audible, AudibleRange, ExpandOptions, DEFAULT_CENT_DEVIATION,
};
pub use pipeline::ScaleReport;
pub use scale::{generate_scale, just_intonation_scale};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
