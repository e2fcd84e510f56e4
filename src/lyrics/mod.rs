//! Lyric sheet processing: deciding what each line is and annotating chord lines.

pub mod classifier;
pub mod sections;

use serde::Serialize;

use crate::chords::grammar::{has_brackets, is_bracketed_chord_line};
use crate::chords::wrap_chords;
use crate::types::LineKind;

pub use classifier::{chord_line_rule, classify_line, contains_common_words, ChordLineRule};
pub use sections::{is_section_header, punctuate_header, rewrite_bracketed_headers, SECTION_NAMES};

/// A line after classification, with its output text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    /// What the line is.
    pub kind: LineKind,
    /// The line as it should appear in the chart.
    pub text: String,
    /// True if the source already had bracket annotations on this line.
    pub pre_annotated: bool,
}

impl ParsedLine {
    /// Classify one line and transform it: chord lines get bracketed chords, bare
    /// section names optionally get a colon.
    ///
    /// Lines that already contain `[` and `]` keep their text byte for byte.
    pub fn parse(line: &str, punctuate_headers: bool) -> Self {
        if has_brackets(line) {
            return Self {
                kind: annotated_kind(line),
                text: line.to_string(),
                pre_annotated: true,
            };
        }

        let kind = classify_line(line);
        let text = match kind {
            LineKind::ChordLine => wrap_chords(line),
            LineKind::SectionHeader if punctuate_headers => punctuate_header(line).into_owned(),
            _ => line.to_string(),
        };
        Self { kind, text, pre_annotated: false }
    }
}

/// Tag for a line that already carries brackets. Only a line of nothing but
/// bracketed chords is a chord line; inline chords over lyrics stay a lyric line.
fn annotated_kind(line: &str) -> LineKind {
    if sections::is_bracketed_header(line) {
        LineKind::SectionHeader
    } else if is_bracketed_chord_line(line) {
        LineKind::ChordLine
    } else {
        LineKind::LyricLine
    }
}

/// Parse every line of `text`.
pub fn parse_lines(text: &str, punctuate_headers: bool) -> Vec<ParsedLine> {
    text.split('\n').map(|line| ParsedLine::parse(line, punctuate_headers)).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_chord_line() {
        let parsed = ParsedLine::parse("  G   D/F#   Em", true);
        assert_eq!(parsed.kind, LineKind::ChordLine);
        assert_eq!(parsed.text, "  [G]   [D/F#]   [Em]");
        assert!(!parsed.pre_annotated);
    }

    #[test]
    fn test_parse_keeps_annotated_lines() {
        let line = "[G]Amazing [C]grace  ";
        let parsed = ParsedLine::parse(line, true);
        assert_eq!(parsed.text, line);
        assert_eq!(parsed.kind, LineKind::LyricLine);
        assert!(parsed.pre_annotated);

        let parsed = ParsedLine::parse("  [G]    [D/F#]", true);
        assert_eq!(parsed.kind, LineKind::ChordLine);
        assert!(parsed.pre_annotated);

        let parsed = ParsedLine::parse("[Bridge]", true);
        assert_eq!(parsed.kind, LineKind::SectionHeader);
        assert_eq!(parsed.text, "[Bridge]");
    }

    #[test]
    fn test_parse_headers() {
        assert_eq!(ParsedLine::parse("Verse 2", true).text, "Verse 2:");
        assert_eq!(ParsedLine::parse("Verse 2", false).text, "Verse 2");
        assert_eq!(ParsedLine::parse("Chorus:", true).text, "Chorus:");
    }

    #[test]
    fn test_parse_lines() {
        let lines = parse_lines("Verse 1\nG  C\nAmazing grace\n", true);
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::SectionHeader, LineKind::ChordLine, LineKind::LyricLine, LineKind::Blank]
        );
    }
}
