//! Scan functions relating to tracks

use log::debug;

use std::fs;
use std::path::Path;

use crate::config::TrackOrder;
use crate::library::{LibraryError, LibraryResult, MusicLibrary, STREAMING_DIR};
use crate::model::track::{SourceInfo, Track};
use crate::scan::filename::parse_file_name;
use crate::scan::title::format_title;
use crate::scan::Rejection;

#[derive(Clone, Debug, PartialEq)]
pub struct RejectedEntry {
    pub file_name: String,
    pub reason: Rejection,
}

/// Outcome of scanning one streaming directory.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TrackScan {
    pub tracks: Vec<Track>,
    pub rejected: Vec<RejectedEntry>,
}

pub struct Tracks<'a>(pub &'a MusicLibrary);

impl Tracks<'_> {
    /// Builds the track for one file of `<album>/streaming`. `album` must
    /// already have passed `MusicLibrary::album_dir`.
    pub(crate) fn build(&self, album: &str, file_name: &str) -> Result<Track, Rejection> {
        let parsed = parse_file_name(file_name)?;

        let title = format_title(parsed.web_safe_title);
        if title.is_empty() {
            return Err(Rejection::EmptyTitle);
        }

        let sources = SourceInfo {
            stream: self.0.public_path(album, STREAMING_DIR, file_name),
            downloads: self.0.downloads().resolve(album, parsed.base_name()),
        };

        Ok(Track {
            title,
            sources,
            disc_number: parsed.disc_number,
            track_number: parsed.track_number,
        })
    }

    pub fn scan(&self, album: &str) -> LibraryResult<TrackScan> {
        let album_dir = self.0.album_dir(album)?;
        self.scan_dir(album, &album_dir)
    }

    pub(crate) fn scan_dir(&self, album: &str, album_dir: &Path) -> LibraryResult<TrackScan> {
        let streaming_dir = album_dir.join(STREAMING_DIR);
        let mut scan = TrackScan::default();

        if !streaming_dir.is_dir() {
            debug!("{}: no streaming directory", album);
            return Ok(scan);
        }

        let entries = fs::read_dir(&streaming_dir).map_err(|err| LibraryError::io(&streaming_dir, err))?;
        for entry in entries {
            let entry = entry.map_err(|err| LibraryError::io(&streaming_dir, err))?;
            if entry.path().is_dir() {
                continue;
            }

            let result = match entry.file_name().into_string() {
                Ok(file_name) => self.build(album, &file_name).map_err(|reason| (file_name, reason)),
                Err(raw) => Err((raw.to_string_lossy().into_owned(), Rejection::NonUtf8Name)),
            };

            match result {
                Ok(track) => scan.tracks.push(track),
                Err((file_name, reason)) => {
                    debug!("{}: skipping {:?}: {}", album, file_name, reason);
                    scan.rejected.push(RejectedEntry { file_name, reason });
                }
            }
        }

        if self.0.config().order() == TrackOrder::DiscAndTrack {
            scan.tracks.sort_by(|a, b| {
                (a.disc_number, a.track_number)
                    .cmp(&(b.disc_number, b.track_number))
                    .then_with(|| a.sources.stream.cmp(&b.sources.stream))
            });
        }

        Ok(scan)
    }
}
