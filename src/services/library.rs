//! Local song library.
//!
//! Scans a directory of plain-text chord sheets named `Title - Artist.txt` and
//! serves them as [`SongSource`]s, standing in for the network fetchers that
//! normally supply raw song text.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::constants::library::{SONG_EXTENSIONS, TITLE_ARTIST_SEPARATOR};
use crate::error::{Error, Result};
use crate::types::{SongId, SongSource};

/// Anything that can hand out raw songs for formatting.
pub trait SongProvider {
    /// Identifiers of every available song.
    fn list(&self) -> Vec<SongId>;

    /// Load one song.
    fn fetch(&self, id: &SongId) -> Result<SongSource>;

    /// Load every song, skipping (and logging) the ones that fail.
    fn fetch_all(&self) -> Vec<SongSource> {
        self.list()
            .iter()
            .filter_map(|id| match self.fetch(id) {
                Ok(song) => Some(song),
                Err(e) => {
                    tracing::warn!("Skipping song {id}: {e}");
                    None
                }
            })
            .collect()
    }
}

/// One song file in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Path relative to the library root, without extension.
    pub id: SongId,
    /// Title from the file name.
    pub title: String,
    /// Artist from the file name, if present.
    pub artist: Option<String>,
    /// Absolute path on disk.
    pub path: PathBuf,
}

/// A directory of song text files.
#[derive(Debug)]
pub struct LocalLibrary {
    entries: Vec<LibraryEntry>,
    by_id: HashMap<SongId, usize>,
    default_artist: String,
}

impl LocalLibrary {
    /// Index every song file below `root`.
    pub fn open(root: &Path, default_artist: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::Library(format!(
                "Library path does not exist or is not a directory: {}",
                root.display()
            )));
        }

        let start = Instant::now();
        let mut entries: Vec<LibraryEntry> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && is_song_file(e.path()))
            .filter_map(|entry| {
                let stem = entry.path().file_stem()?.to_str()?;
                let (title, artist) = parse_song_filename(stem);
                let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
                let id = relative.with_extension("").to_string_lossy().replace('\\', "/");
                Some(LibraryEntry {
                    id: SongId::new(id),
                    title,
                    artist,
                    path: entry.path().to_path_buf(),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));

        let by_id = entries.iter().enumerate().map(|(i, e)| (e.id.clone(), i)).collect();
        tracing::info!("Indexed {} songs in {:?} from {}", entries.len(), start.elapsed(), root.display());

        Ok(Self {
            entries,
            by_id,
            default_artist: default_artist.to_string(),
        })
    }
}

impl SongProvider for LocalLibrary {
    fn list(&self) -> Vec<SongId> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    fn fetch(&self, id: &SongId) -> Result<SongSource> {
        let entry = self
            .by_id
            .get(id)
            .and_then(|&i| self.entries.get(i))
            .ok_or_else(|| Error::Library(format!("No song with id '{id}'")))?;

        let content = fs_err::read_to_string(&entry.path).map_err(|e| Error::io(e, entry.path.clone()))?;
        Ok(SongSource::new(
            entry.title.clone(),
            entry.artist.clone().unwrap_or_else(|| self.default_artist.clone()),
            content,
        ))
    }
}

fn is_song_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SONG_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

/// Split `Title - Artist` into its parts. The last separator wins, so titles
/// may contain dashes of their own.
pub fn parse_song_filename(stem: &str) -> (String, Option<String>) {
    match stem.rsplit_once(TITLE_ARTIST_SEPARATOR) {
        Some((title, artist)) if !title.trim().is_empty() && !artist.trim().is_empty() => {
            (title.trim().to_string(), Some(artist.trim().to_string()))
        }
        _ => (stem.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_song_filename() {
        assert_eq!(
            parse_song_filename("Amazing Grace - Chris Tomlin"),
            ("Amazing Grace".to_string(), Some("Chris Tomlin".to_string()))
        );
        assert_eq!(
            parse_song_filename("Lord - I Need You - Matt Maher"),
            ("Lord - I Need You".to_string(), Some("Matt Maher".to_string()))
        );
        assert_eq!(parse_song_filename("Doxology"), ("Doxology".to_string(), None));
    }

    #[test]
    fn test_open_missing_dir() {
        let result = LocalLibrary::open(Path::new("/tmp/nonexistent_chordflow_library"), "Unknown Artist");
        assert!(matches!(result, Err(Error::Library(_))));
    }

    #[test]
    fn test_index_and_fetch() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("hymns")).unwrap();
        std::fs::write(dir.path().join("Oceans - Hillsong United.txt"), "D  A  G\nYou call me out").unwrap();
        std::fs::write(dir.path().join("hymns/Doxology.onsong"), "G  D  G\nPraise God").unwrap();
        std::fs::write(dir.path().join("notes.md"), "not a song").unwrap();

        let library = LocalLibrary::open(dir.path(), "Unknown Artist").unwrap();
        let ids: Vec<String> = library.list().into_iter().map(|id| id.0).collect();
        assert_eq!(ids, vec!["Oceans - Hillsong United", "hymns/Doxology"]);

        let song = library.fetch(&SongId::from("hymns/Doxology")).unwrap();
        assert_eq!(song.title, "Doxology");
        assert_eq!(song.artist, "Unknown Artist");
        assert!(song.content.starts_with("G  D  G"));

        assert_eq!(library.fetch_all().len(), 2);
        assert!(library.fetch(&SongId::from("missing")).is_err());
    }
}
