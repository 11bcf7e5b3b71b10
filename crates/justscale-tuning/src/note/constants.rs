//! Reference tables for note resolution.

/// Equal-temperament tonic frequencies at A4 = 440 Hz.
///
/// Enharmonic pairs share a frequency, so the 17 entries cover 12 pitch classes.
pub const REFERENCE_FREQUENCIES: [(&str, f64); 17] = [
    ("C", 261.63),
    ("C#", 277.18),
    ("Db", 277.18),
    ("D", 293.66),
    ("D#", 311.13),
    ("Eb", 311.13),
    ("E", 329.63),
    ("F", 349.23),
    ("F#", 369.99),
    ("Gb", 369.99),
    ("G", 392.0),
    ("G#", 415.30),
    ("Ab", 415.30),
    ("A", 440.0),
    ("A#", 466.16),
    ("Bb", 466.16),
    ("B", 493.88),
];

/// Uppercased alternate spellings and the sharp/natural key they map to.
pub(super) const ENHARMONICS: [(&str, &str); 9] = [
    ("DB", "C#"),
    ("EB", "D#"),
    ("GB", "F#"),
    ("AB", "G#"),
    ("BB", "A#"),
    ("CB", "B"),
    ("FB", "E"),
    ("E#", "F"),
    ("B#", "C"),
];

/// Unicode flat sign, accepted in place of `b`.
pub(super) const FLAT_GLYPH: char = '\u{266D}';
