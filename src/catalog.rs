//! In-memory song catalog and audio file lookup.
//!
//! The catalog is built once at startup and never mutated. Audio files are
//! looked up on disk per request, so files added or removed after startup
//! are picked up without a restart.

use crate::{config::Config, models::Song, Result};
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// The built-in song table.
    pub fn seeded() -> Self {
        Self::new(vec![
            Song::new(1, "Summer Vibes", "Chill Wave", "songs/song1.mp3"),
            Song::new(2, "Relaxing Piano", "Classical Dreams", "songs/song2.mp3"),
            Song::new(3, "Upbeat Electronic", "Digital Pulse", "songs/song3.mp3"),
        ])
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// First song with a matching id.
    pub fn find(&self, id: u32) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Path of the audio file backing song `id`.
    ///
    /// Returns `Ok(None)` when the id is unknown or its file is not a regular
    /// file on disk right now. Callers cannot tell the two apart.
    pub async fn locate_audio(&self, config: &Config, id: u32) -> Result<Option<PathBuf>> {
        let Some(song) = self.find(id) else {
            tracing::debug!("Song {} is not in the catalog", id);
            return Ok(None);
        };

        let path = config.resolve(&song.file);

        match tokio::fs::metadata(&path).await {
            Ok(m) if m.is_file() => Ok(Some(path)),
            Ok(_) => {
                tracing::warn!("Song {} path {} is not a regular file", id, path.display());
                Ok(None)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Song {} file {} is missing", id, path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
