//! Scan functions relating to albums

use log::debug;

use std::fs;

use crate::library::{LibraryError, LibraryResult, MusicLibrary, MANIFEST_FILE};
use crate::model::album::Album;
use crate::scan::tracks::{RejectedEntry, TrackScan};

pub struct Albums<'a>(pub &'a MusicLibrary);

impl Albums<'_> {
    pub fn get(&self, name: &str) -> LibraryResult<Album> {
        self.scan_report(name).map(|(album, _)| album)
    }

    /// Like [`get`](Self::get), also returning the streaming entries that were skipped.
    pub fn scan_report(&self, name: &str) -> LibraryResult<(Album, Vec<RejectedEntry>)> {
        debug!("looking up album {:?}", name);
        let album_dir = self.0.album_dir(name)?;

        let mut album = self.0.read_manifest(&album_dir)?;
        let TrackScan { tracks, rejected } = self.0.tracks().scan_dir(name, &album_dir)?;
        debug!("{}: {} tracks, {} skipped", name, tracks.len(), rejected.len());

        album.tracks = tracks;
        Ok((album, rejected))
    }

    /// Names of the album directories directly under the library root that
    /// carry a manifest, sorted.
    pub fn list(&self) -> LibraryResult<Vec<String>> {
        let root = self.0.root();
        let entries = fs::read_dir(root).map_err(|err| LibraryError::io(root, err))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| LibraryError::io(root, err))?.path();
            if !path.join(MANIFEST_FILE).is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
