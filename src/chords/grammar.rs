//! Chord token grammar.
//!
//! Every place that needs to recognise a chord (line classification, bracket
//! wrapping, extraction from bracketed text) goes through the patterns in this
//! file, all built from [`CHORD_PATTERN`].

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::{Match, Regex};

/// Root letter, accidental, quality marker, extension digits, slash bass.
pub const CHORD_PATTERN: &str = r"[A-G][#b]?(?:maj|min|m|sus|aug|dim|add)?\d*(?:/[A-G][#b]?)?";

lazy_static! {
    /// A whole whitespace-delimited token that is a chord.
    static ref CHORD_TOKEN: Regex = Regex::new(&format!("^(?:{CHORD_PATTERN})$")).unwrap();

    /// Candidate chords anywhere in a line; boundaries are checked separately.
    static ref CHORD_SCAN: Regex = Regex::new(CHORD_PATTERN).unwrap();

    /// A chord already wrapped as `[G]`.
    static ref BRACKETED_CHORD: Regex = Regex::new(&format!(r"\[({CHORD_PATTERN})\]")).unwrap();

    /// Root plus an optional minor `m`, used when comparing against scale entries.
    static ref KEY_PREFIX: Regex = Regex::new(r"^[A-G][#b]?m?").unwrap();
}

/// True if the whole token is a chord (`Am7`, `D/F#`, `Gsus4`).
pub fn is_chord_token(token: &str) -> bool {
    CHORD_TOKEN.is_match(token)
}

/// All chord matches in `line` that stand alone as words.
///
/// A match only counts when neither neighbour is a letter, digit or underscore,
/// so the `C` in `Come` or the `Am` in `Amazing` never qualifies. Unlike a plain
/// `\b` the trailing check runs after the accidental, which keeps `F#` whole.
pub fn find_chords(line: &str) -> impl Iterator<Item = Match<'_>> {
    CHORD_SCAN
        .find_iter(line)
        .filter(move |m| stands_alone(line, m.start(), m.end()))
}

/// Wrap every standalone chord on the line in brackets.
///
/// Lines that already carry both `[` and `]` are returned untouched so wrapping
/// never nests.
pub fn wrap_chords(line: &str) -> String {
    if has_brackets(line) {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut last = 0;
    for m in find_chords(line) {
        out.push_str(&line[last..m.start()]);
        out.push('[');
        out.push_str(m.as_str());
        out.push(']');
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Chord texts written as `[X]` anywhere in `text`, in order of appearance.
pub fn bracketed_chords(text: &str) -> impl Iterator<Item = &str> {
    BRACKETED_CHORD
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// True if the line holds bracketed chords and nothing else but whitespace
/// (`[G]   [D/F#]`). Inline annotations like `[G]Amazing grace` do not count.
pub fn is_bracketed_chord_line(line: &str) -> bool {
    BRACKETED_CHORD.is_match(line) && BRACKETED_CHORD.replace_all(line, "").trim().is_empty()
}

/// Root plus optional `m` prefix of a chord or scale entry (`F#m7` -> `F#m`,
/// `Bdim` -> `B`). Text without a recognisable root comes back unchanged.
pub fn key_prefix(name: &str) -> &str {
    KEY_PREFIX.find(name).map_or(name, |m| m.as_str())
}

/// True if the line already has bracket annotations.
pub fn has_brackets(line: &str) -> bool {
    line.contains('[') && line.contains(']')
}

fn stands_alone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_chord_tokens() {
        for token in ["A", "Am", "F#m", "Bm7", "C/E", "Dsus4", "Cmaj7", "Bb", "Ebadd9", "G/F#", "Bdim", "Caug"] {
            assert!(is_chord_token(token), "{token} should be a chord");
        }
        for token in ["H", "Amazing", "the", "E7sus4", "C/", "x2", ""] {
            assert!(!is_chord_token(token), "{token} should not be a chord");
        }
    }

    #[test]
    fn test_find_chords_skips_words() {
        let found: Vec<&str> = find_chords("Come Amazing Grace").map(|m| m.as_str()).collect();
        assert!(found.is_empty());

        let found: Vec<&str> = find_chords("  G   D/F#  Em7 C").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["G", "D/F#", "Em7", "C"]);
    }

    #[test]
    fn test_find_chords_keeps_sharps_whole() {
        let found: Vec<&str> = find_chords("C#  F#").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["C#", "F#"]);
    }

    #[test]
    fn test_wrap_chords() {
        assert_eq!(wrap_chords("G   D   Em   C"), "[G]   [D]   [Em]   [C]");
        assert_eq!(wrap_chords("       D          A"), "       [D]          [A]");
        assert_eq!(wrap_chords("G D x2"), "[G] [D] x2");
    }

    #[test]
    fn test_wrap_chords_leaves_bracketed_lines() {
        let line = "[G]Amazing [C]grace how [G]sweet";
        assert_eq!(wrap_chords(line), line);
        let header = "[Chorus]";
        assert_eq!(wrap_chords(header), header);
    }

    #[test]
    fn test_bracketed_chords() {
        let text = "[G]Amazing [C/E]grace\n[Verse 1]\nhow [Am7]sweet [H]";
        let found: Vec<&str> = bracketed_chords(text).collect();
        assert_eq!(found, vec!["G", "C/E", "Am7"]);
    }

    #[test]
    fn test_bracketed_chord_line() {
        assert!(is_bracketed_chord_line("[G]   [D/F#]   [Em]"));
        assert!(is_bracketed_chord_line("   [Am7]  "));
        assert!(!is_bracketed_chord_line("[G]Amazing grace how [C]sweet"));
        assert!(!is_bracketed_chord_line("[Chorus]"));
        assert!(!is_bracketed_chord_line("   "));
    }

    #[test]
    fn test_key_prefix() {
        assert_eq!(key_prefix("F#m7"), "F#m");
        assert_eq!(key_prefix("Bdim"), "B");
        assert_eq!(key_prefix("Ebm"), "Ebm");
        assert_eq!(key_prefix("F##m"), "F#");
        assert_eq!(key_prefix("Dm"), "Dm");
        assert_eq!(key_prefix("?"), "?");
    }
}
