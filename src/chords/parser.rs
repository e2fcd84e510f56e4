//! Chord parsing and extraction.

use serde::{Deserialize, Serialize};

use super::grammar::bracketed_chords;

/// Broad chord quality. Extensions (`7`, `sus4`, `add9`) stay in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    /// Major triad and anything not otherwise classified.
    Major,
    /// Contains an `m` that is not part of `maj`.
    Minor,
    /// Contains `dim`.
    Diminished,
    /// Contains `aug`.
    Augmented,
}

impl ChordQuality {
    /// Classify a chord suffix (everything after the root).
    pub fn from_suffix(suffix: &str) -> Self {
        if suffix.contains("dim") {
            Self::Diminished
        } else if suffix.contains("aug") {
            Self::Augmented
        } else if suffix.contains('m') && !suffix.contains("maj") {
            Self::Minor
        } else {
            Self::Major
        }
    }
}

/// A single parsed chord.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    /// Root as spelled (`C#` and `Db` are different roots). Empty if unparseable.
    pub root: String,
    /// Broad quality, `None` if the text had no recognisable root.
    pub quality: Option<ChordQuality>,
    /// The chord text exactly as it was written, minus brackets.
    pub original_text: String,
}

impl Chord {
    /// True if a root was found.
    pub fn is_parsed(&self) -> bool {
        !self.root.is_empty()
    }

    /// Root, or root plus `m` for minor chords. This is the only form key
    /// matching looks at.
    pub fn simplified_name(&self) -> String {
        match self.quality {
            Some(ChordQuality::Minor) => format!("{}m", self.root),
            _ => self.root.clone(),
        }
    }
}

/// Parse one chord, with or without surrounding brackets.
///
/// Never fails: text without an `A`-`G` root gives a chord with an empty root and
/// no quality, keeping the original text.
pub fn parse_chord(text: &str) -> Chord {
    let text = text.trim().trim_matches(|c| c == '[' || c == ']').trim();

    let Some(root_len) = root_len(text) else {
        return Chord {
            root: String::new(),
            quality: None,
            original_text: text.to_string(),
        };
    };

    let (root, suffix) = text.split_at(root_len);
    Chord {
        root: root.to_string(),
        quality: Some(ChordQuality::from_suffix(suffix)),
        original_text: text.to_string(),
    }
}

/// Every bracketed chord in the text, in order. Bare chord names are ignored, so
/// text must go through bracket wrapping first.
pub fn extract_chords(text: &str) -> Vec<Chord> {
    bracketed_chords(text).map(parse_chord).collect()
}

/// Byte length of a leading `[A-G][#b]?` root.
fn root_len(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    if !matches!(chars.next()?, 'A'..='G') {
        return None;
    }
    Some(if matches!(chars.next(), Some('#' | 'b')) { 2 } else { 1 })
}
