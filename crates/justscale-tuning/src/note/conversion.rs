//! Note name normalization and tonic lookup.

use super::constants::{ENHARMONICS, FLAT_GLYPH, REFERENCE_FREQUENCIES};
use crate::error::{TuningError, TuningResult};

/// Normalize a user-supplied note name.
///
/// Trims surrounding whitespace, replaces the flat glyph with `b`, uppercases
/// the result and maps enharmonic spellings to their sharp/natural key.
/// Unknown names are returned uppercased and otherwise untouched.
///
/// # Examples
/// ```
/// use justscale_tuning::note::normalize_note;
///
/// assert_eq!(normalize_note("  eb "), "D#");
/// assert_eq!(normalize_note("B\u{266D}"), "A#");
/// assert_eq!(normalize_note("f#"), "F#");
/// assert_eq!(normalize_note("h"), "H");
/// ```
pub fn normalize_note(name: &str) -> String {
    let note = name.trim().replace(FLAT_GLYPH, "b").to_uppercase();

    ENHARMONICS
        .iter()
        .find(|(alias, _)| *alias == note)
        .map(|(_, key)| (*key).to_string())
        .unwrap_or(note)
}

/// All keys of the reference table, sorted by byte order.
///
/// This is the list reported back to the caller when a note cannot be resolved.
pub fn valid_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = REFERENCE_FREQUENCIES.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys
}

/// Resolve a note name to its entry in the reference table.
///
/// Returns the canonical key together with its frequency.
pub(crate) fn lookup(root_note: &str) -> TuningResult<(&'static str, f64)> {
    let key = normalize_note(root_note);

    REFERENCE_FREQUENCIES
        .iter()
        .find(|(k, _)| *k == key)
        .copied()
        .ok_or_else(|| TuningError::invalid_note(root_note, valid_keys()))
}

/// Resolve a note name to its canonical key.
///
/// # Examples
/// ```
/// use justscale_tuning::note::canonical_key;
///
/// assert_eq!(canonical_key("db").unwrap(), "C#");
/// assert!(canonical_key("H").is_err());
/// ```
pub fn canonical_key(root_note: &str) -> TuningResult<&'static str> {
    lookup(root_note).map(|(key, _)| key)
}

/// Resolve a note name to its equal-temperament tonic frequency in Hz.
///
/// # Errors
/// Returns [`TuningError::InvalidNote`] when the normalized name is not in
/// the reference table. The error message lists every valid key.
///
/// # Examples
/// ```
/// use justscale_tuning::note::resolve_tonic;
///
/// assert_eq!(resolve_tonic("A").unwrap(), 440.0);
/// assert_eq!(resolve_tonic(" c ").unwrap(), 261.63);
/// ```
pub fn resolve_tonic(root_note: &str) -> TuningResult<f64> {
    lookup(root_note).map(|(_, freq)| freq)
}
