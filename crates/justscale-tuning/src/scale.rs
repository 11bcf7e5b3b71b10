//! Just-intonation major scale generation.

use crate::error::TuningResult;
use crate::note::resolve_tonic;

/// Number of degrees in one generated octave.
pub const SCALE_LEN: usize = 12;

/// Just-intonation ratios relative to the tonic, indexed by semitone offset.
pub const JI_MAJOR_RATIOS: [f64; SCALE_LEN] = [
    1.0,         // Unison      1/1
    16.0 / 15.0, // Minor 2nd   16/15
    9.0 / 8.0,   // Major 2nd   9/8
    6.0 / 5.0,   // Minor 3rd   6/5
    5.0 / 4.0,   // Major 3rd   5/4
    4.0 / 3.0,   // Perfect 4th 4/3
    45.0 / 32.0, // Tritone     45/32
    3.0 / 2.0,   // Perfect 5th 3/2
    8.0 / 5.0,   // Minor 6th   8/5
    5.0 / 3.0,   // Major 6th   5/3
    9.0 / 5.0,   // Minor 7th   9/5
    15.0 / 8.0,  // Major 7th   15/8
];

/// One octave of scale frequencies above `tonic`, in ratio order.
///
/// # Examples
/// ```
/// use justscale_tuning::scale::generate_scale;
///
/// let scale = generate_scale(440.0);
/// assert_eq!(scale[0], 440.0);
/// assert_eq!(scale[7], 660.0);
/// ```
pub fn generate_scale(tonic: f64) -> [f64; SCALE_LEN] {
    JI_MAJOR_RATIOS.map(|ratio| tonic * ratio)
}

/// Just-intonation scale frequencies (one octave) for a root note name.
///
/// # Errors
/// Returns [`TuningError::InvalidNote`](crate::TuningError::InvalidNote)
/// when the note cannot be resolved.
pub fn just_intonation_scale(root_note: &str) -> TuningResult<Vec<f64>> {
    let tonic = resolve_tonic(root_note)?;
    Ok(generate_scale(tonic).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TuningError;

    #[test]
    fn test_ratios_ascend_within_octave() {
        assert_eq!(JI_MAJOR_RATIOS[0], 1.0);
        assert_eq!(JI_MAJOR_RATIOS[11], 15.0 / 8.0);
        for pair in JI_MAJOR_RATIOS.windows(2) {
            assert!(pair[0] < pair[1], "{:?}", pair);
        }
        assert!(JI_MAJOR_RATIOS[11] < 2.0);
    }

    #[test]
    fn test_generate_scale_preserves_ratio_order() {
        let scale = generate_scale(100.0);
        for (freq, ratio) in scale.iter().zip(JI_MAJOR_RATIOS) {
            assert_eq!(*freq, 100.0 * ratio);
        }
    }

    #[test]
    fn test_c_scale_starts_on_tonic() {
        let scale = just_intonation_scale("C").unwrap();
        assert_eq!(scale.len(), SCALE_LEN);
        assert_eq!(scale[0], 261.63);
    }

    #[test]
    fn test_a_scale() {
        let scale = just_intonation_scale("A").unwrap();
        assert_eq!(scale[0], 440.0);
        assert_eq!(scale[7], 660.0);
        assert_eq!(scale[4], 550.0);
        assert_eq!(scale[11], 825.0);
        for pair in scale.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_flat_spelling_matches_sharp() {
        assert_eq!(
            just_intonation_scale("Bb").unwrap(),
            just_intonation_scale("a#").unwrap()
        );
    }

    #[test]
    fn test_invalid_root() {
        let err = just_intonation_scale("H").unwrap_err();
        assert!(matches!(err, TuningError::InvalidNote { .. }));
    }
}
