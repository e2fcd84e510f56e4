//! Section header vocabulary and rewriting.
//!
//! Sources mark song parts as `[Verse 1]`, `Verse 1:` or a bare `Verse 1`. The
//! chart format wants `Verse 1:`; everything here builds on [`SECTION_NAMES`].

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Known section names. Each may carry a trailing number (`Verse 2`, `Tag 3`).
pub const SECTION_NAMES: &[&str] = &[
    "Intro",
    "Verse",
    "Chorus",
    "Pre-Chorus",
    "Bridge",
    "Instrumental",
    "Interlude",
    "Turnaround",
    "Outro Chorus",
    "Outro",
    "Tag",
    "Ending",
    "Solo",
    "Break",
    "Refrain",
    "Coda",
    "Hook",
    "Vamp",
];

fn names_alternation() -> String {
    SECTION_NAMES.iter().map(|name| regex::escape(name)).collect::<Vec<_>>().join("|")
}

/// A bare section name on its own, e.g. `chorus` or `Verse 2`.
#[allow(clippy::expect_used)]
static RE_BARE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})(?:\s*\d+)?$", names_alternation()))
        .expect("valid regex: RE_BARE_HEADER")
});

/// A bracketed header line, e.g. `[Pre-Chorus]`.
#[allow(clippy::expect_used)]
static RE_BRACKETED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?mi)^\[((?:{})(?:\s*\d+)?)\][ \t]*$", names_alternation()))
        .expect("valid regex: RE_BRACKETED_HEADER")
});

/// True for a trimmed line that is a section header: ends in `:` or is a known
/// section name.
pub fn is_section_header(trimmed: &str) -> bool {
    trimmed.ends_with(':') || is_section_name(trimmed)
}

/// True if the trimmed text is exactly a known section name.
pub fn is_section_name(trimmed: &str) -> bool {
    RE_BARE_HEADER.is_match(trimmed)
}

/// True if the line is a bracketed section header like `[Chorus]`.
pub fn is_bracketed_header(line: &str) -> bool {
    RE_BRACKETED_HEADER.is_match(line)
}

/// Append a colon to a bare section name (`Verse 1` -> `Verse 1:`). Anything else
/// is returned as is.
pub fn punctuate_header(line: &str) -> Cow<'_, str> {
    let trimmed = line.trim_end();
    if is_section_name(trimmed.trim_start()) {
        Cow::Owned(format!("{trimmed}:"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Turn every `[Header]` line in the text into `Header:`.
pub fn rewrite_bracketed_headers(text: &str) -> Cow<'_, str> {
    RE_BRACKETED_HEADER.replace_all(text, "${1}:")
}
