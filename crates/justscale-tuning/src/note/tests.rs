//! Tests for note normalization and tonic lookup.

use super::*;
use crate::error::TuningError;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

#[test]
fn test_normalize_naturals_and_sharps() {
    assert_eq!(normalize_note("C"), "C");
    assert_eq!(normalize_note("c"), "C");
    assert_eq!(normalize_note("c#"), "C#");
    assert_eq!(normalize_note("  a# "), "A#");
    assert_eq!(normalize_note("\tg\n"), "G");
}

#[test]
fn test_normalize_flats_map_to_sharps() {
    assert_eq!(normalize_note("Db"), "C#");
    assert_eq!(normalize_note("eb"), "D#");
    assert_eq!(normalize_note("GB"), "F#");
    assert_eq!(normalize_note("Ab"), "G#");
    assert_eq!(normalize_note("bb"), "A#");
}

#[test]
fn test_normalize_flat_glyph() {
    assert_eq!(normalize_note("D\u{266D}"), "C#");
    assert_eq!(normalize_note(" b\u{266D} "), "A#");
}

#[test]
fn test_normalize_double_accidental_spellings() {
    assert_eq!(normalize_note("Cb"), "B");
    assert_eq!(normalize_note("Fb"), "E");
    assert_eq!(normalize_note("E#"), "F");
    assert_eq!(normalize_note("b#"), "C");
}

#[test]
fn test_normalize_passes_unknown_names_through() {
    assert_eq!(normalize_note("h"), "H");
    assert_eq!(normalize_note("  xyz "), "XYZ");
    assert_eq!(normalize_note(""), "");
}

#[test]
fn test_every_spelling_resolves_to_twelve_keys() {
    let spellings = [
        "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
        "B",
    ];

    let mut seen = BTreeSet::new();
    for spelling in spellings {
        for variant in [
            spelling.to_string(),
            spelling.to_lowercase(),
            format!("  {} ", spelling.to_uppercase()),
        ] {
            let key = normalize_note(&variant);
            assert!(
                REFERENCE_FREQUENCIES.iter().any(|(k, _)| *k == key),
                "{} normalized to unknown key {}",
                variant,
                key
            );
            seen.insert(key);
        }
    }

    assert_eq!(seen.len(), 12);
}

#[test]
fn test_resolve_tonic_exact_values() {
    assert_eq!(resolve_tonic("C").unwrap(), 261.63);
    assert_eq!(resolve_tonic("A").unwrap(), 440.0);
    assert_eq!(resolve_tonic("Db").unwrap(), 277.18);
    assert_eq!(resolve_tonic("gb").unwrap(), 369.99);
    assert_eq!(resolve_tonic("Cb").unwrap(), 493.88);
    assert_eq!(resolve_tonic("E#").unwrap(), 349.23);
}

#[test]
fn test_resolve_tonic_matches_table_for_sharp_keys() {
    for (key, freq) in REFERENCE_FREQUENCIES {
        if key.len() == 1 || key.ends_with('#') {
            assert_eq!(resolve_tonic(key).unwrap(), freq, "key {}", key);
        }
    }
}

#[test]
fn test_enharmonic_pairs_share_frequency() {
    assert_eq!(resolve_tonic("C#").unwrap(), resolve_tonic("Db").unwrap());
    assert_eq!(resolve_tonic("D#").unwrap(), resolve_tonic("Eb").unwrap());
    assert_eq!(resolve_tonic("F#").unwrap(), resolve_tonic("Gb").unwrap());
    assert_eq!(resolve_tonic("G#").unwrap(), resolve_tonic("Ab").unwrap());
    assert_eq!(resolve_tonic("A#").unwrap(), resolve_tonic("Bb").unwrap());
}

#[test]
fn test_resolve_tonic_invalid_note() {
    let err = resolve_tonic("H").unwrap_err();
    match &err {
        TuningError::InvalidNote { name, valid_keys } => {
            assert_eq!(name, "H");
            assert_eq!(valid_keys.len(), 17);
        }
        other => panic!("expected InvalidNote, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Please input a valid root note: \
         [A, A#, Ab, B, Bb, C, C#, D, D#, Db, E, Eb, F, F#, G, G#, Gb]"
    );
}

#[test]
fn test_valid_keys_sorted() {
    let keys = valid_keys();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys.first(), Some(&"A"));
    assert_eq!(keys.last(), Some(&"Gb"));
}

#[test]
fn test_canonical_key() {
    assert_eq!(canonical_key("bb").unwrap(), "A#");
    assert_eq!(canonical_key(" e ").unwrap(), "E");
    assert!(matches!(
        canonical_key("C##"),
        Err(TuningError::InvalidNote { .. })
    ));
}
