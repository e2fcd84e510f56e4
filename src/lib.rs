//! `chordflow` - chord sheet normalization.
//!
//! Takes free-form lyric and chord text, brackets the chords, detects the key and
//! writes a consistent chart that chord-chart renderers can read.

// Re-export public modules for use in integration tests and as a library
pub mod analysis;
pub mod chords;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod lyrics;
pub mod services;
pub mod types;

pub use format::normalize;
