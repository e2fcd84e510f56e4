//! Nashville number annotation.

use super::key::degree_of;
use super::scales::{scale_for, NUMERALS};
use crate::chords::Chord;
use crate::constants::output::UNKNOWN_NUMERAL;

/// Scale-degree numeral for `chord` in `key`, e.g. `V7`, `IVM7`, `Isus`.
///
/// Chords outside the key (and unknown keys) give `?`.
pub fn numeral_for(chord: &Chord, key: &str) -> String {
    let Some(scale) = scale_for(key) else {
        return UNKNOWN_NUMERAL.to_string();
    };
    let Some(degree) = degree_of(scale, &chord.simplified_name()) else {
        return UNKNOWN_NUMERAL.to_string();
    };

    let mut numeral = NUMERALS[degree].to_string();
    numeral.push_str(modifier(&chord.original_text));
    numeral
}

/// At most one modifier, checked in order: dominant 7th, major 7th, suspension.
fn modifier(original: &str) -> &'static str {
    let maj7 = original.contains("maj7");
    if original.contains('7') && !maj7 {
        "7"
    } else if maj7 {
        "M7"
    } else if original.contains("sus") {
        "sus"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::chords::parse_chord;

    #[test]
    fn test_numerals_in_g() {
        let cases = [
            ("G", "I"),
            ("Am", "ii"),
            ("Bm", "iii"),
            ("C", "IV"),
            ("D", "V"),
            ("Em", "vi"),
            ("F#dim", "vii°"),
        ];
        for (chord, numeral) in cases {
            assert_eq!(numeral_for(&parse_chord(chord), "G"), numeral, "{chord} in G");
        }
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(numeral_for(&parse_chord("D7"), "G"), "V7");
        assert_eq!(numeral_for(&parse_chord("Cmaj7"), "G"), "IVM7");
        assert_eq!(numeral_for(&parse_chord("Dsus4"), "G"), "Vsus");
        assert_eq!(numeral_for(&parse_chord("Em7"), "G"), "vi7");
        assert_eq!(numeral_for(&parse_chord("G/B"), "G"), "I");
    }

    #[test]
    fn test_chromatic_chord_is_unknown() {
        assert_eq!(numeral_for(&parse_chord("F#"), "C"), "?");
        assert_eq!(numeral_for(&parse_chord("Bb"), "G"), "?");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(numeral_for(&parse_chord("C"), ""), "?");
        assert_eq!(numeral_for(&parse_chord("C"), "H"), "?");
    }
}
