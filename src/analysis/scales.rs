//! Diatonic chord tables for the major keys.

/// The seven chords of one major key, tonic first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyScale {
    /// Key root as spelled (`F#`, `Gb`).
    pub root: &'static str,
    /// Chords on degrees I through vii°.
    pub degrees: [&'static str; 7],
}

/// Roman numerals for the degrees of a major scale.
pub const NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

/// Candidate keys in canonical order. Ties in key detection go to the earlier
/// entry, so this order is part of the output contract.
pub const KEY_SCALES: [KeyScale; 17] = [
    KeyScale { root: "C", degrees: ["C", "Dm", "Em", "F", "G", "Am", "Bdim"] },
    KeyScale { root: "C#", degrees: ["C#", "D#m", "E#m", "F#", "G#", "A#m", "B#dim"] },
    KeyScale { root: "Db", degrees: ["Db", "Ebm", "Fm", "Gb", "Ab", "Bbm", "Cdim"] },
    KeyScale { root: "D", degrees: ["D", "Em", "F#m", "G", "A", "Bm", "C#dim"] },
    KeyScale { root: "D#", degrees: ["D#", "E#m", "F##m", "G#", "A#", "B#m", "C##dim"] },
    KeyScale { root: "Eb", degrees: ["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim"] },
    KeyScale { root: "E", degrees: ["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"] },
    KeyScale { root: "F", degrees: ["F", "Gm", "Am", "Bb", "C", "Dm", "Edim"] },
    KeyScale { root: "F#", degrees: ["F#", "G#m", "A#m", "B", "C#", "D#m", "E#dim"] },
    KeyScale { root: "Gb", degrees: ["Gb", "Abm", "Bbm", "Cb", "Db", "Ebm", "Fdim"] },
    KeyScale { root: "G", degrees: ["G", "Am", "Bm", "C", "D", "Em", "F#dim"] },
    KeyScale { root: "G#", degrees: ["G#", "A#m", "B#m", "C#", "D#", "E#m", "F##dim"] },
    KeyScale { root: "Ab", degrees: ["Ab", "Bbm", "Cm", "Db", "Eb", "Fm", "Gdim"] },
    KeyScale { root: "A", degrees: ["A", "Bm", "C#m", "D", "E", "F#m", "G#dim"] },
    KeyScale { root: "A#", degrees: ["A#", "B#m", "C##m", "D#", "E#", "F##m", "G##dim"] },
    KeyScale { root: "Bb", degrees: ["Bb", "Cm", "Dm", "Eb", "F", "Gm", "Adim"] },
    KeyScale { root: "B", degrees: ["B", "C#m", "D#m", "E", "F#", "G#m", "A#dim"] },
];

/// Look up the scale for a key root, exact spelling.
pub fn scale_for(key: &str) -> Option<&'static KeyScale> {
    KEY_SCALES.iter().find(|scale| scale.root == key)
}

/// True if `key` is one of the table roots.
pub fn is_known_key(key: &str) -> bool {
    scale_for(key).is_some()
}
