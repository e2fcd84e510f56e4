//! Chord analysis: key detection and Nashville numbering over a whole song.

pub mod key;
pub mod nashville;
pub mod scales;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::chords::{extract_chords, parse_chord, Chord};

pub use key::{detect_key, KeyEstimate, KeyScore};
pub use nashville::numeral_for;
pub use scales::{is_known_key, scale_for, KeyScale, KEY_SCALES, NUMERALS};

/// One distinct chord with its role in the detected key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progression {
    /// Chord text as written.
    pub chord: String,
    /// Nashville numeral, `?` if outside the key.
    pub numeral: String,
    /// Times the chord appears.
    pub count: usize,
}

/// Full chord analysis of a bracket-annotated song.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Detected key root, if any key matched.
    pub detected_key: Option<String>,
    /// Share of the detected key's score in percent.
    pub confidence: f64,
    /// Occurrences per chord text.
    pub chord_counts: BTreeMap<String, usize>,
    /// Distinct chords, most frequent first, ties alphabetical.
    pub progressions: Vec<Progression>,
    /// Every chord in order of appearance.
    pub chords: Vec<Chord>,
}

impl Analysis {
    /// Render the chord legend block, empty if the song has no chords.
    ///
    /// ```text
    /// Detected Key: G (67% confidence)
    ///
    /// Chord Progressions:
    ///   [G] = I (used 3x)
    /// ```
    pub fn legend(&self) -> String {
        if self.progressions.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Detected Key: {} ({:.0}% confidence)",
            self.detected_key.as_deref().unwrap_or_default(),
            self.confidence
        );
        out.push('\n');
        out.push_str("Chord Progressions:\n");
        for prog in &self.progressions {
            let _ = writeln!(out, "  [{}] = {} (used {}x)", prog.chord, prog.numeral, prog.count);
        }
        out
    }
}

/// Analyse every bracketed chord in `text`.
///
/// Key detection sees the complete text at once; callers must not feed it line
/// by line.
pub fn analyze(text: &str) -> Analysis {
    let chords = extract_chords(text);

    let mut chord_counts: BTreeMap<String, usize> = BTreeMap::new();
    for chord in &chords {
        *chord_counts.entry(chord.original_text.clone()).or_insert(0) += 1;
    }

    let estimate = detect_key(&chords);
    let key = estimate.key.unwrap_or_default();

    // BTreeMap iteration is alphabetical; the stable sort keeps that for ties.
    let mut progressions: Vec<Progression> = chord_counts
        .iter()
        .map(|(name, &count)| Progression {
            chord: name.clone(),
            numeral: numeral_for(&parse_chord(name), key),
            count,
        })
        .collect();
    progressions.sort_by(|a, b| b.count.cmp(&a.count));

    Analysis {
        detected_key: estimate.key.map(str::to_string),
        confidence: estimate.confidence,
        chord_counts,
        progressions,
        chords,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const SONG: &str = "Verse 1:\n\
        [G]Amazing [G/B]grace how [C]sweet the [G]sound\n\
        That [G]saved a [Em]wretch like [D]me\n\
        [D7]I once was [G]lost";

    #[test]
    fn test_analyze_song() {
        let analysis = analyze(SONG);
        assert_eq!(analysis.detected_key.as_deref(), Some("G"));
        assert_eq!(analysis.chord_counts.get("G"), Some(&4));
        assert_eq!(analysis.chords.len(), 9);

        let first = &analysis.progressions[0];
        assert_eq!(first.chord, "G");
        assert_eq!(first.numeral, "I");
        assert_eq!(first.count, 4);

        let d7 = analysis.progressions.iter().find(|p| p.chord == "D7").unwrap();
        assert_eq!(d7.numeral, "V7");
    }

    #[test]
    fn test_progression_ties_are_alphabetical() {
        let analysis = analyze("[G] [D] [C] [Em] [G]");
        let order: Vec<&str> = analysis.progressions.iter().map(|p| p.chord.as_str()).collect();
        assert_eq!(order, vec!["G", "C", "D", "Em"]);
    }

    #[test]
    fn test_no_chords() {
        let analysis = analyze("Just words here\nand more words");
        assert_eq!(analysis.detected_key, None);
        assert!(analysis.progressions.is_empty());
        assert_eq!(analysis.legend(), "");
    }

    #[test]
    fn test_legend() {
        let analysis = analyze("[G] [C] [D] [G]");
        let legend = analysis.legend();
        assert!(legend.starts_with("Detected Key: G ("));
        assert!(legend.contains("Chord Progressions:\n"));
        assert!(legend.contains("  [G] = I (used 2x)\n"));
        assert!(legend.contains("  [C] = IV (used 1x)\n"));
    }
}
