//! Chord recognition: the shared token grammar plus parsing and extraction.

pub mod grammar;
pub mod parser;

pub use grammar::{find_chords, is_chord_token, wrap_chords};
pub use parser::{extract_chords, parse_chord, Chord, ChordQuality};
