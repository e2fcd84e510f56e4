//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Line classification thresholds.
pub mod classifier {
    /// Leading whitespace run that marks a line as positioned above lyrics.
    pub const MIN_CHORD_INDENT: usize = 3;

    /// Ratio of full line width to trimmed width that signals chord spacing.
    pub const SPACED_LINE_RATIO: f64 = 1.5;

    /// Minimum share of chord tokens for a line without common words.
    pub const MIN_CHORD_TOKEN_RATIO: f64 = 0.5;

    /// Punctuation stripped from tokens before the common-word check.
    pub const WORD_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':', '\'', '"'];
}

/// Key inference weights, indexed by scale degree.
pub mod scoring {
    /// Weight for the tonic (I).
    pub const TONIC_WEIGHT: f64 = 3.0;

    /// Weight for the subdominant (IV) and dominant (V).
    pub const PRIMARY_WEIGHT: f64 = 2.5;

    /// Weight for the relative minor (vi).
    pub const RELATIVE_MINOR_WEIGHT: f64 = 2.0;

    /// Weight for every other degree.
    pub const OTHER_WEIGHT: f64 = 1.0;
}

/// Output header defaults.
pub mod output {
    /// Tempo placeholder written into every chart.
    pub const DEFAULT_TEMPO: &str = "100 BPM";

    /// Time signature placeholder written into every chart.
    pub const DEFAULT_TIME_SIGNATURE: &str = "4/4";

    /// Key used when nothing was detected or declared.
    pub const FALLBACK_KEY: &str = "C";

    /// Artist used for manual submissions without one.
    pub const DEFAULT_ARTIST: &str = "Unknown Artist";

    /// Numeral for chords outside the key.
    pub const UNKNOWN_NUMERAL: &str = "?";
}

/// Song library constants.
pub mod library {
    /// File extensions indexed as songs.
    pub const SONG_EXTENSIONS: &[&str] = &["txt", "onsong", "chopro"];

    /// Default library folder below the home directory.
    pub const DEFAULT_LIBRARY_DIR: &str = "Documents/Chord Charts";

    /// Separator between title and artist in song file names.
    pub const TITLE_ARTIST_SEPARATOR: &str = " - ";
}
