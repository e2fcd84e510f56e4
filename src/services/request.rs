//! Manual format requests.
//!
//! A user pasting a song supplies title, artist and text as JSON. The request is
//! checked here, before any formatting happens, so the formatter itself only
//! ever sees usable text.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{SongSource, SourceFormat};

/// Body of a manual formatting request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatRequest {
    /// Song title (required).
    #[serde(default)]
    pub song: Option<String>,
    /// Artist name, defaulted when empty.
    #[serde(default)]
    pub artist: Option<String>,
    /// Raw song text (required).
    #[serde(default)]
    pub content: Option<String>,
}

impl FormatRequest {
    /// Parse a request from JSON text; `origin` names the file in errors.
    pub fn from_json(json: &str, origin: Option<&Path>) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::parse(format!("invalid format request: {e}"), origin.map(Path::to_path_buf)))
    }

    /// Validate the request and turn it into a song source.
    ///
    /// Title and content must be present and non-blank; a blank artist becomes
    /// `default_artist`.
    pub fn into_source(self, default_artist: &str) -> Result<SongSource> {
        let title = self
            .song
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::invalid("Song title is required"))?;
        let content = self
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::invalid("Content is required"))?;
        let artist = self
            .artist
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| default_artist.to_string());

        tracing::info!("Formatting manual submission: {title} - {artist}");

        Ok(SongSource {
            title,
            artist,
            declared_key: None,
            content,
            format: SourceFormat::Plain,
        })
    }
}
