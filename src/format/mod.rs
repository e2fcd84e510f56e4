//! Chart normalization: raw lyric/chord text in, OnSong-style chart out.
//!
//! The pipeline runs in two passes over the text. The first goes line by line:
//! classify, bracket chord lines, punctuate bare headers. The second works on
//! the whole result: rewrite `[Header]` lines, then extract every chord and
//! detect the key, which needs global chord counts. The header block and the
//! body are then assembled.

pub mod markup;

use std::borrow::Cow;
use std::fmt::Write as _;

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::{analyze, Analysis};
use crate::constants::output::{DEFAULT_TEMPO, DEFAULT_TIME_SIGNATURE, FALLBACK_KEY};
use crate::lyrics::{parse_lines, rewrite_bracketed_headers};
use crate::types::{SongSource, SourceFormat};

const KEY_LABEL: &str = "Key:";
const TEMPO_LABEL: &str = "Tempo:";
const TIME_SIGNATURE_LABEL: &str = "Time Signature:";

/// Chart header values and pipeline switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Tempo line value.
    pub tempo: String,
    /// Time signature line value.
    pub time_signature: String,
    /// Key written when nothing was detected or declared.
    pub fallback_key: String,
    /// Add a colon to bare section names (`Verse 1` -> `Verse 1:`).
    pub punctuate_headers: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO.to_string(),
            time_signature: DEFAULT_TIME_SIGNATURE.to_string(),
            fallback_key: FALLBACK_KEY.to_string(),
            punctuate_headers: true,
        }
    }
}

/// A finished chart plus the analysis behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedSong {
    /// Song title.
    pub title: String,
    /// Artist name.
    pub artist: String,
    /// Key written into the chart header.
    pub key: String,
    /// The complete chart text.
    pub text: String,
    /// Chord analysis of the body.
    pub analysis: Analysis,
}

/// Normalize raw song text into a chart with default header values.
///
/// Never fails. Feeding the result back in with the same title and artist
/// returns it unchanged.
pub fn normalize(title: &str, artist: &str, declared_key: &str, raw_text: &str) -> String {
    format_text(title, artist, declared_key, raw_text, &FormatOptions::default()).text
}

/// Normalize raw song text, keeping the analysis.
pub fn format_text(
    title: &str,
    artist: &str,
    declared_key: &str,
    raw_text: &str,
    options: &FormatOptions,
) -> FormattedSong {
    let raw = raw_text.replace("\r\n", "\n");
    let source = strip_prior_header(&raw, title, artist);

    let wrapped = parse_lines(source, options.punctuate_headers)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");
    let body = rewrite_bracketed_headers(&wrapped).into_owned();

    let analysis = analyze(&body);
    let key = choose_key(analysis.detected_key.as_deref(), declared_key, &options.fallback_key);
    tracing::debug!(
        "Formatted '{title}' in {key} ({} chords, {:.0}% confidence)",
        analysis.chords.len(),
        analysis.confidence
    );

    let mut text = String::with_capacity(body.len() + 128);
    let _ = writeln!(text, "{title}");
    let _ = writeln!(text, "{artist}");
    let _ = writeln!(text, "{KEY_LABEL} {key}");
    let _ = writeln!(text, "{TEMPO_LABEL} {}", options.tempo);
    let _ = writeln!(text, "{TIME_SIGNATURE_LABEL} {}", options.time_signature);
    text.push('\n');
    text.push_str(&body);

    FormattedSong {
        title: title.to_string(),
        artist: artist.to_string(),
        key,
        text,
        analysis,
    }
}

/// Format a fetched song, applying the cleanup its source format needs first.
pub fn format_song(source: &SongSource, options: &FormatOptions) -> FormattedSong {
    let content: Cow<'_, str> = match source.format {
        SourceFormat::Plain => Cow::Borrowed(&source.content),
        SourceFormat::UltimateGuitar => Cow::Owned(markup::convert_ultimate_guitar(&source.content)),
        SourceFormat::WorshipChords => Cow::Owned(markup::tidy_layout(&source.content)),
    };
    format_text(
        &source.title,
        &source.artist,
        source.declared_key.as_deref().unwrap_or_default(),
        &content,
        options,
    )
}

/// Format many songs in parallel. Output order matches input order.
pub fn format_batch(sources: &[SongSource], options: &FormatOptions) -> Vec<FormattedSong> {
    tracing::info!("Formatting {} songs", sources.len());
    sources.par_iter().map(|source| format_song(source, options)).collect()
}

/// Detected key wins, then a non-empty declared key, then the fallback.
fn choose_key(detected: Option<&str>, declared: &str, fallback: &str) -> String {
    detected
        .or_else(|| Some(declared.trim()).filter(|k| !k.is_empty()))
        .unwrap_or(fallback)
        .to_string()
}

/// Drop a header block this module wrote earlier (title, artist, `Key:`, optional
/// `Tempo:`/`Time Signature:`, blank line) so re-formatting does not stack headers.
fn strip_prior_header<'a>(raw: &'a str, title: &str, artist: &str) -> &'a str {
    let mut lines = raw.split_inclusive('\n').peekable();
    let mut consumed = 0;

    for expected in [title, artist] {
        match lines.next() {
            Some(line) if line.trim_end() == expected.trim_end() => consumed += line.len(),
            _ => return raw,
        }
    }

    match lines.next() {
        Some(line) if line.starts_with(KEY_LABEL) => consumed += line.len(),
        _ => return raw,
    }

    while let Some(line) =
        lines.next_if(|l| l.starts_with(TEMPO_LABEL) || l.starts_with(TIME_SIGNATURE_LABEL))
    {
        consumed += line.len();
    }

    match lines.next() {
        Some(line) if line.trim().is_empty() => consumed += line.len(),
        _ => return raw,
    }

    tracing::debug!("Stripped existing chart header from '{title}'");
    &raw[consumed..]
}
