//! Line classification: header, blank, chord line or lyric line.
//!
//! Chord sheets put chords on their own line above the lyric they belong to,
//! usually indented or spread out with spaces. The hard cases are short lines
//! where a word happens to be a valid chord name (`A`, `Am`, `Em`), which the
//! common-word check settles.

use std::collections::HashSet;

use lazy_static::lazy_static;
use unicode_width::UnicodeWidthChar;

use super::sections::is_section_header;
use crate::chords::is_chord_token;
use crate::constants::classifier::{
    MIN_CHORD_INDENT, MIN_CHORD_TOKEN_RATIO, SPACED_LINE_RATIO, WORD_PUNCTUATION,
};
use crate::types::LineKind;

lazy_static! {
    /// Words that only show up in lyrics. One lowercase `a` is enough to veto a
    /// line, which is why `A` chords need a line to themselves.
    static ref COMMON_WORDS: HashSet<&'static str> = [
        "the", "and", "you", "your", "my", "me", "i", "a", "to", "in", "of", "is", "it",
        "for", "on", "with", "that", "this", "from", "all", "will", "can", "when", "where",
        "who", "what", "have", "has", "had", "been", "was", "were", "are", "be", "he", "she",
        "we", "they", "them", "their", "his", "her", "our", "us", "him", "there", "then",
        "but", "as", "at", "by", "an", "if", "or", "so", "up", "out", "do", "not", "like",
        "just", "now", "know", "get", "got", "make", "see", "go", "come", "take", "give",
    ]
    .into_iter()
    .collect();
}

/// Which test made a line a chord line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordLineRule {
    /// Indented by at least three columns, every token a chord.
    Indented,
    /// At least 1.5 times wider than its trimmed text, every token a chord.
    Spaced,
    /// Every token a chord.
    AllChords,
    /// At least half the tokens are chords and none is a common word.
    Majority,
}

/// Classify a single line of raw song text.
///
/// Lines that already carry `[` and `]` should not be classified at all; the
/// pipeline passes them through.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if is_section_header(trimmed) {
        return LineKind::SectionHeader;
    }
    match chord_line_rule(line) {
        Some(rule) => {
            tracing::debug!("Chord line ({rule:?}): {trimmed}");
            LineKind::ChordLine
        }
        None => LineKind::LyricLine,
    }
}

/// The rule under which `line` counts as a chord line, if any.
#[allow(clippy::cast_precision_loss)]
pub fn chord_line_rule(line: &str) -> Option<ChordLineRule> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let chord_count = tokens.iter().filter(|t| is_chord_token(t)).count();
    if chord_count == 0 {
        return None;
    }

    if chord_count == tokens.len() {
        if leading_whitespace(line) >= MIN_CHORD_INDENT {
            return Some(ChordLineRule::Indented);
        }
        if display_width(line) as f64 >= display_width(trimmed) as f64 * SPACED_LINE_RATIO {
            return Some(ChordLineRule::Spaced);
        }
        return Some(ChordLineRule::AllChords);
    }

    if contains_common_words(trimmed) {
        return None;
    }

    (chord_count as f64 / tokens.len() as f64 >= MIN_CHORD_TOKEN_RATIO)
        .then_some(ChordLineRule::Majority)
}

/// True if any token, lowercased and stripped of punctuation, is a common
/// lyric word.
pub fn contains_common_words(line: &str) -> bool {
    line.split_whitespace().any(|token| {
        let word = token.to_lowercase();
        COMMON_WORDS.contains(word.trim_matches(WORD_PUNCTUATION))
    })
}

/// Leading spaces and tabs.
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| matches!(c, ' ' | '\t')).count()
}

/// Column width of the text, counting a tab as one column.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c == '\t' { 1 } else { c.width().unwrap_or(0) })
        .sum()
}
