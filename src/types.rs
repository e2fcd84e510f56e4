//! Core type definitions shared across the formatter.
//!
//! Small enums and newtype wrappers that keep line roles, source formats and
//! song identifiers from being mixed up with plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a single line of song text plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// `Verse 1:`, `[Chorus]`, `Bridge` and friends.
    SectionHeader,
    /// Empty or whitespace-only.
    Blank,
    /// Chord annotations positioned above lyrics.
    ChordLine,
    /// Anything else.
    LyricLine,
}

impl LineKind {
    /// Returns all line kinds in classification order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Blank, Self::SectionHeader, Self::ChordLine, Self::LyricLine]
    }

    /// Returns the human-readable name of this line kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SectionHeader => "Section",
            Self::Blank => "Blank",
            Self::ChordLine => "Chords",
            Self::LyricLine => "Lyrics",
        }
    }
}

/// Where a song's raw text came from, which decides the cleanup applied before
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// Typed or pasted text.
    #[default]
    Plain,
    /// Ultimate Guitar tab markup with `[ch]` and `[tab]` tags.
    UltimateGuitar,
    /// Worship-chords page text with loose spacing.
    #[serde(rename = "worshipchords")]
    WorshipChords,
}

impl SourceFormat {
    /// Returns all source formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Plain, Self::UltimateGuitar, Self::WorshipChords]
    }

    /// Returns the command-line name of this source format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::UltimateGuitar => "ultimate-guitar",
            Self::WorshipChords => "worshipchords",
        }
    }

    /// Look up a source format by its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Song identifier within a song provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SongId(pub String);

impl SongId {
    /// Create a new `SongId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SongId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SongId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SongId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A song as handed over by a fetcher: the only input the formatter needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongSource {
    /// Song title, written as the first output line.
    pub title: String,
    /// Artist name, written as the second output line.
    pub artist: String,
    /// Key the source claims the song is in, if it says.
    #[serde(default)]
    pub declared_key: Option<String>,
    /// Raw lyric and chord text.
    pub content: String,
    /// Markup convention the content uses.
    #[serde(default)]
    pub format: SourceFormat,
}

impl SongSource {
    /// Create a plain-text source with no declared key.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            declared_key: None,
            content: content.into(),
            format: SourceFormat::Plain,
        }
    }

    /// Set the declared key.
    #[must_use]
    pub fn with_declared_key(mut self, key: impl Into<String>) -> Self {
        self.declared_key = Some(key.into());
        self
    }

    /// Set the source format.
    #[must_use]
    pub const fn with_format(mut self, format: SourceFormat) -> Self {
        self.format = format;
        self
    }
}
