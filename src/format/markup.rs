//! Source-specific cleanup applied before normalization.

use crate::lyrics::ParsedLine;
use crate::types::LineKind;

/// Ultimate Guitar wraps content in `[tab]` blocks and chords in `[ch]`/`[/ch]`.
/// Strip the blocks and turn each chord into `[X]`.
pub fn convert_ultimate_guitar(content: &str) -> String {
    content
        .replace("[tab]", "")
        .replace("[/tab]", "")
        .replace("[ch]", "[")
        .replace("[/ch]", "]")
}

/// Tighten the loose spacing of scraped chord pages.
///
/// Trailing whitespace goes, leading blank lines go, a blank line right after a
/// section header or chord line goes (chords belong directly above their
/// lyric), and runs of blank lines collapse to one.
pub fn tidy_layout(content: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut last_blank = false;
    let mut last_kind = LineKind::Blank;

    for line in content.split('\n') {
        let cleaned = line.trim_end_matches([' ', '\t', '\r']);

        if cleaned.is_empty() {
            if out.is_empty() || last_blank || matches!(last_kind, LineKind::SectionHeader | LineKind::ChordLine) {
                continue;
            }
            out.push("");
            last_blank = true;
            continue;
        }

        last_blank = false;
        last_kind = ParsedLine::parse(cleaned, false).kind;
        out.push(cleaned);
    }

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
