//! Debug tool to show how a chord sheet was read and which keys it scored for.
//!
//! Usage:
//!   `cargo run --bin dump_keys -- <song.txt>`
//!   `cargo run --bin dump_keys -- <song.txt> --lines`
//!
//! Prints the adjusted score of every candidate key and, with `--lines`, the
//! classification of each input line.

// Development/debug binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::env;
use std::path::Path;

use chordflow::analysis::{analyze, detect_key, KEY_SCALES};
use chordflow::lyrics::{chord_line_rule, parse_lines};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <song.txt> [--lines]", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let raw = fs_err::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let lines = parse_lines(&raw, true);
    if args.contains(&"--lines".to_string()) {
        for (line, source) in lines.iter().zip(raw.split('\n')) {
            let rule = if line.pre_annotated {
                "annotated".to_string()
            } else {
                chord_line_rule(source).map(|r| format!("{r:?}")).unwrap_or_default()
            };
            println!("{:<8} {:<10} | {}", line.kind.name(), rule, line.text);
        }
        println!();
    }

    let body = lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n");
    let analysis = analyze(&body);
    let estimate = detect_key(&analysis.chords);

    println!("{} chords, {} distinct", analysis.chords.len(), analysis.chord_counts.len());
    println!("{:<4} {:>8} {:>8}", "Key", "Score", "Matched");
    for scale in &KEY_SCALES {
        let score = estimate.scores.iter().find(|s| s.key == scale.root);
        let marker = if estimate.key == Some(scale.root) { " <" } else { "" };
        match score {
            Some(s) => println!("{:<4} {:>8.2} {:>8}{marker}", s.key, s.score, s.matched),
            None => println!("{:<4} {:>8} {:>8}", scale.root, "-", 0),
        }
    }
    println!();
    print!("{}", analysis.legend());
}
