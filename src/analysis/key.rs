//! Key detection from chord frequencies.
//!
//! Each candidate major key earns points for every distinct chord that sits on one
//! of its degrees, weighted towards I, IV, V and vi and multiplied by the chord's
//! count. The total is then scaled by the share of the song's distinct chords the
//! key explains, so a key that only matches one loud chord loses to a key that
//! covers the whole vocabulary.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scales::{KeyScale, KEY_SCALES};
use crate::chords::grammar::key_prefix;
use crate::chords::Chord;
use crate::constants::scoring;

/// Adjusted score for one candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyScore {
    /// Key root.
    pub key: &'static str,
    /// Weighted score after the coverage adjustment.
    pub score: f64,
    /// Number of distinct chord names found in the key's scale.
    pub matched: usize,
}

/// Result of key detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyEstimate {
    /// Best key, `None` when nothing matched.
    pub key: Option<&'static str>,
    /// Best score as a percentage of all scores, 0 when there is no key.
    pub confidence: f64,
    /// Every key that matched at least one chord, in canonical order.
    pub scores: Vec<KeyScore>,
}

impl KeyEstimate {
    const fn none() -> Self {
        Self { key: None, confidence: 0.0, scores: Vec::new() }
    }
}

/// Count chords by simplified name (`Em7` and `Em` both count as `Em`).
/// Chords without a root are skipped.
pub fn tally(chords: &[Chord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for chord in chords.iter().filter(|c| c.is_parsed()) {
        *counts.entry(chord.simplified_name()).or_insert(0) += 1;
    }
    counts
}

/// Detect the most likely major key for a sequence of chords.
pub fn detect_key(chords: &[Chord]) -> KeyEstimate {
    if chords.is_empty() {
        return KeyEstimate::none();
    }
    score_counts(&tally(chords))
}

/// Score every candidate key against simplified-name counts.
#[allow(clippy::cast_precision_loss)]
pub fn score_counts(counts: &BTreeMap<String, usize>) -> KeyEstimate {
    if counts.is_empty() {
        return KeyEstimate::none();
    }

    let distinct = counts.len() as f64;
    let scores: Vec<KeyScore> = KEY_SCALES
        .iter()
        .filter_map(|scale| {
            let (raw, matched) = score_scale(scale, counts);
            (matched > 0).then(|| KeyScore {
                key: scale.root,
                score: raw * (matched as f64 / distinct),
                matched,
            })
        })
        .collect();

    // Strict comparison keeps the first key in table order on ties.
    let mut best: Option<&KeyScore> = None;
    for score in &scores {
        if score.score > best.map_or(0.0, |b| b.score) {
            best = Some(score);
        }
    }

    let total: f64 = scores.iter().map(|s| s.score).sum();
    let Some(best) = best.filter(|_| total > 0.0) else {
        tracing::debug!("No key matched {} distinct chords", counts.len());
        return KeyEstimate { key: None, confidence: 0.0, scores };
    };

    let confidence = best.score / total * 100.0;
    tracing::debug!("Detected key {} ({confidence:.0}% confidence)", best.key);
    KeyEstimate { key: Some(best.key), confidence, scores }
}

/// Index of the first degree of `scale` whose root/minor prefix equals the
/// prefix of `name`.
pub fn degree_of(scale: &KeyScale, name: &str) -> Option<usize> {
    let wanted = key_prefix(name);
    scale.degrees.iter().position(|degree| key_prefix(degree) == wanted)
}

/// Raw weighted score and distinct match count for one key.
#[allow(clippy::cast_precision_loss)]
fn score_scale(scale: &KeyScale, counts: &BTreeMap<String, usize>) -> (f64, usize) {
    let mut score = 0.0;
    let mut matched = 0;
    for (name, &count) in counts {
        if let Some(degree) = degree_of(scale, name) {
            score += count as f64 * degree_weight(degree);
            matched += 1;
        }
    }
    (score, matched)
}

const fn degree_weight(degree: usize) -> f64 {
    match degree {
        0 => scoring::TONIC_WEIGHT,
        3 | 4 => scoring::PRIMARY_WEIGHT,
        5 => scoring::RELATIVE_MINOR_WEIGHT,
        _ => scoring::OTHER_WEIGHT,
    }
}
