//! Note name resolution.
//!
//! This module turns free-form note names into canonical keys and looks up
//! their equal-temperament reference frequency (A4 = 440 Hz).

mod constants;
mod conversion;

#[cfg(test)]
mod tests;

pub use constants::REFERENCE_FREQUENCIES;

pub use conversion::{canonical_key, normalize_note, resolve_tonic, valid_keys};

pub(crate) use conversion::lookup;
