//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::analysis::is_known_key;
use crate::constants::library::DEFAULT_LIBRARY_DIR;
use crate::constants::output::{DEFAULT_ARTIST, DEFAULT_TEMPO, DEFAULT_TIME_SIGNATURE, FALLBACK_KEY};
use crate::error::{Error, Result};
use crate::format::FormatOptions;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory of song text files
    pub library_path: Option<PathBuf>,
    /// Tempo written into chart headers
    pub tempo: String,
    /// Time signature written into chart headers
    pub time_signature: String,
    /// Key used when none is detected or declared
    pub default_key: String,
    /// Artist used for submissions that leave it empty
    pub default_artist: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            library_path: None,
            tempo: DEFAULT_TEMPO.to_string(),
            time_signature: DEFAULT_TIME_SIGNATURE.to_string(),
            default_key: FALLBACK_KEY.to_string(),
            default_artist: DEFAULT_ARTIST.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(tempo) = lookup("CHORDFLOW_TEMPO").filter(|v| !v.trim().is_empty()) {
            config.tempo = tempo.trim().to_string();
        }

        if let Some(sig) = lookup("CHORDFLOW_TIME_SIGNATURE").filter(|v| !v.trim().is_empty()) {
            config.time_signature = sig.trim().to_string();
        }

        if let Some(artist) = lookup("CHORDFLOW_DEFAULT_ARTIST").filter(|v| !v.trim().is_empty()) {
            config.default_artist = artist.trim().to_string();
        }

        if let Some(key) = lookup("CHORDFLOW_DEFAULT_KEY") {
            let key = key.trim();
            if !is_known_key(key) {
                return Err(Error::config(
                    format!("Unknown default key '{key}' in CHORDFLOW_DEFAULT_KEY"),
                    "Use a major key root such as C, F#, Bb or Eb",
                ));
            }
            config.default_key = key.to_string();
        }

        // Library path: env var override, or default ~/Documents/Chord Charts/
        config.library_path = lookup("CHORDFLOW_LIBRARY").map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join(DEFAULT_LIBRARY_DIR))
                    .filter(|p| p.is_dir())
            },
            |path| {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                if !p.is_dir() {
                    tracing::warn!("CHORDFLOW_LIBRARY is not a directory: {}", p.display());
                }
                p.is_dir().then_some(p)
            },
        );

        Ok(config)
    }

    /// Chart options derived from this configuration.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            tempo: self.tempo.clone(),
            time_signature: self.time_signature.clone(),
            fallback_key: self.default_key.clone(),
            ..FormatOptions::default()
        }
    }
}
