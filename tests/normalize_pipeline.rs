//! End-to-end tests for chart normalization.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chordflow::analysis::{analyze, numeral_for};
use chordflow::chords::{parse_chord, wrap_chords};
use chordflow::format::{format_song, normalize, FormatOptions};
use chordflow::lyrics::classify_line;
use chordflow::services::request::FormatRequest;
use chordflow::types::{LineKind, SongSource, SourceFormat};

const HOW_GREAT: &str = "\
Intro
G   D   Em   C

Verse 1
G                 C
  The splendor of the King
G                 D
  Clothed in majesty
   G                  Em
Let all the earth rejoice
        C        D
All the earth rejoice

[Chorus]
G        Em
How great is our God
        C
Sing with me";

fn body(chart: &str) -> &str {
    chart.split_once("\n\n").map_or("", |(_, body)| body)
}

#[test]
fn detects_g_from_chord_only_line() {
    let chart = normalize("How Great Is Our God", "Chris Tomlin", "", HOW_GREAT);
    assert!(chart.starts_with("How Great Is Our God\nChris Tomlin\nKey: G\nTempo: 100 BPM\nTime Signature: 4/4\n\n"));

    let analysis = analyze(body(&chart));
    assert_eq!(analysis.detected_key.as_deref(), Some("G"));
    let numerals: Vec<(&str, &str)> = analysis
        .progressions
        .iter()
        .map(|p| (p.chord.as_str(), p.numeral.as_str()))
        .collect();
    assert!(numerals.contains(&("G", "I")));
    assert!(numerals.contains(&("D", "V")));
    assert!(numerals.contains(&("Em", "vi")));
    assert!(numerals.contains(&("C", "IV")));
}

#[test]
fn chart_body_layout() {
    let chart = normalize("How Great Is Our God", "Chris Tomlin", "", HOW_GREAT);
    let lines: Vec<&str> = body(&chart).lines().collect();
    assert_eq!(lines[0], "Intro:");
    assert_eq!(lines[1], "[G]   [D]   [Em]   [C]");
    assert_eq!(lines[3], "Verse 1:");
    assert_eq!(lines[4], "[G]                 [C]");
    assert_eq!(lines[5], "  The splendor of the King");
    assert_eq!(lines[8], "   [G]                  [Em]");
    assert_eq!(lines[9], "Let all the earth rejoice");
    assert_eq!(lines[13], "Chorus:");
    assert_eq!(lines[15], "How great is our God");
}

#[test]
fn indented_chords_are_a_chord_line() {
    assert_eq!(classify_line("       D          A"), LineKind::ChordLine);
}

#[test]
fn lyric_with_common_words_is_never_chords() {
    assert_eq!(classify_line("I will sing to the Lord"), LineKind::LyricLine);
    let chart = normalize("T", "A", "", "I will sing to the Lord");
    assert!(chart.ends_with("\n\nI will sing to the Lord"));
}

#[test]
fn bracketed_lines_are_not_rewrapped() {
    let line = "[G]Amazing [C/E]grace   D";
    assert_eq!(wrap_chords(line), line);
    let chart = normalize("T", "A", "", line);
    assert!(chart.ends_with(line));
}

#[test]
fn normalize_reaches_fixed_point() {
    let once = normalize("How Great Is Our God", "Chris Tomlin", "G", HOW_GREAT);
    let twice = normalize("How Great Is Our God", "Chris Tomlin", "G", &once);
    let thrice = normalize("How Great Is Our God", "Chris Tomlin", "G", &twice);
    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}

#[test]
fn chromatic_chord_gets_question_mark() {
    assert_eq!(numeral_for(&parse_chord("F#"), "C"), "?");

    let analysis = analyze("[C] [F] [G] [C] [F#]");
    let fsharp = analysis.progressions.iter().find(|p| p.chord == "F#").unwrap();
    assert_eq!(fsharp.numeral, "?");
}

#[test]
fn parsed_chord_keeps_original_text() {
    for text in ["G", "F#m7", "Bbmaj7", "D/F#", "Csus4", "Ebadd9", "Gdim", "Aaug"] {
        let chord = parse_chord(text);
        assert_eq!(chord.original_text, text);
        assert!(text.starts_with(&chord.root));
        assert!((1..=2).contains(&chord.root.len()));
    }
}

#[test]
fn garbage_input_degrades_quietly() {
    let chart = normalize("", "", "", "%%%\n[not a chord]\n\t\n~~~");
    assert!(chart.contains("Key: C\n"));
    assert!(chart.ends_with("%%%\n[not a chord]\n\t\n~~~"));
}

#[test]
fn worshipchords_source_is_tidied() {
    let raw = "\n\nVerse 1\n\n   D        A\n\nBless the Lord O my soul   \n\n\n\nChorus\n  G    D\nWorship His holy name\n";
    let source = SongSource::new("10,000 Reasons", "Matt Redman", raw)
        .with_declared_key("G")
        .with_format(SourceFormat::WorshipChords);
    let song = format_song(&source, &FormatOptions::default());
    assert_eq!(
        body(&song.text),
        "Verse 1:\n   [D]        [A]\nBless the Lord O my soul\n\nChorus:\n  [G]    [D]\nWorship His holy name"
    );
    assert_eq!(song.key, "D");
}

#[test]
fn manual_request_round_trip() {
    let req = FormatRequest::from_json(
        r#"{"song":"Cornerstone","artist":"","content":"[Verse 1]\nC    F    C\nMy hope is built on nothing less"}"#,
        None,
    )
    .unwrap();
    let source = req.into_source("Unknown Artist").unwrap();
    let song = format_song(&source, &FormatOptions::default());
    assert!(song.text.starts_with("Cornerstone\nUnknown Artist\nKey: C\n"));
    assert!(song.text.ends_with("Verse 1:\n[C]    [F]    [C]\nMy hope is built on nothing less"));
}
