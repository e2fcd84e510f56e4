//! `chordflow` - format chord sheets into annotated charts.
//!
//! Usage:
//!   chordflow <FILE> [--title T] [--artist A] [--key K] [--source plain|ultimate-guitar|worshipchords] [--legend] [--json]
//!   chordflow --request <REQUEST.json> [--legend] [--json]
//!   chordflow --library [DIR] [--json]

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use chordflow::config::Config;
use chordflow::format::{format_batch, format_song, FormattedSong};
use chordflow::services::library::{LocalLibrary, SongProvider};
use chordflow::services::request::FormatRequest;
use chordflow::types::{SongSource, SourceFormat};

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    request: Option<PathBuf>,
    library: Option<Option<PathBuf>>,
    title: Option<String>,
    artist: Option<String>,
    key: Option<String>,
    source: SourceFormat,
    legend: bool,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1).peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--title" => args.title = Some(iter.next().context("--title needs a value")?),
            "--artist" => args.artist = Some(iter.next().context("--artist needs a value")?),
            "--key" => args.key = Some(iter.next().context("--key needs a value")?),
            "--source" => {
                let name = iter.next().context("--source needs a value")?;
                args.source = SourceFormat::from_name(&name)
                    .with_context(|| format!("unknown source format '{name}'"))?;
            }
            "--request" => args.request = Some(iter.next().context("--request needs a file")?.into()),
            "--library" => {
                let dir = iter.next_if(|next| !next.starts_with("--")).map(PathBuf::from);
                args.library = Some(dir);
            }
            "--legend" => args.legend = true,
            "--json" => args.json = true,
            other if other.starts_with("--") => bail!("unknown option {other}"),
            other => args.input = Some(other.to_string()),
        }
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            Ok(text)
        }
        Some(path) => fs_err::read_to_string(path).map_err(Into::into),
    }
}

fn title_from_path(input: Option<&str>) -> Option<String> {
    let stem = Path::new(input.filter(|p| *p != "-")?).file_stem()?.to_str()?;
    Some(chordflow::services::library::parse_song_filename(stem).0)
}

fn print_song(song: &FormattedSong, legend: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(song)?);
        return Ok(());
    }
    if legend {
        let block = song.analysis.legend();
        if !block.is_empty() {
            println!("{block}");
        }
    }
    println!("{}", song.text);
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let config = Config::load().context("loading configuration")?;
    let options = config.format_options();

    if let Some(dir) = args.library {
        let root = dir
            .or_else(|| config.library_path.clone())
            .context("no library directory given and CHORDFLOW_LIBRARY is not set")?;
        let library = LocalLibrary::open(&root, &config.default_artist)?;
        let songs = format_batch(&library.fetch_all(), &options);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&songs)?);
        } else {
            for song in &songs {
                println!("{}\n", song.text);
            }
        }
        return Ok(());
    }

    let source = if let Some(path) = &args.request {
        let json = fs_err::read_to_string(path)?;
        FormatRequest::from_json(&json, Some(path.as_path()))?.into_source(&config.default_artist)?
    } else {
        let content = read_input(args.input.as_deref())?;
        let title = args
            .title
            .or_else(|| title_from_path(args.input.as_deref()))
            .unwrap_or_else(|| "Untitled".to_string());
        let mut source = SongSource::new(
            title,
            args.artist.unwrap_or_else(|| config.default_artist.clone()),
            content,
        )
        .with_format(args.source);
        source.declared_key = args.key;
        source
    };

    let song = format_song(&source, &options);
    print_song(&song, args.legend, args.json)
}
