//! Scan functions relating to downloadable renditions

use log::debug;

use crate::library::{MusicLibrary, DOWNLOAD_DIR};
use crate::model::track::Download;

pub(crate) struct Downloads<'a>(pub &'a MusicLibrary);

impl Downloads<'_> {
    /// Probes `<album>/download/<base>.<ext>` for every configured format, in
    /// configured order. Absent files and an absent directory give no entries.
    /// `album` must already have passed `MusicLibrary::album_dir`.
    pub(crate) fn resolve(&self, album: &str, base_name: &str) -> Vec<Download> {
        let download_dir = self.0.album_path(album).join(DOWNLOAD_DIR);

        self.0
            .config()
            .formats()
            .iter()
            .filter_map(|format| {
                let file_name = format!("{}.{}", base_name, format.extension());
                if !download_dir.join(&file_name).is_file() {
                    return None;
                }
                debug!("{}: found {} download for {}", album, format.label(), base_name);
                Some(Download {
                    format: *format,
                    file: self.0.public_path(album, DOWNLOAD_DIR, &file_name),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryConfig;
    use crate::library::tests::{album, library, touch};
    use crate::model::DownloadFormat;

    #[test]
    fn resolve_without_download_dir() {
        let (dir, library) = library();
        album(&dir, "test");

        assert!(library.downloads().resolve("test", "1-01-a").is_empty());
    }

    #[test]
    fn resolve_keeps_probe_order() {
        let (dir, library) = library();
        let album_dir = album(&dir, "test");
        touch(&album_dir, DOWNLOAD_DIR, "track.wav");
        touch(&album_dir, DOWNLOAD_DIR, "track.ogg");

        let result = library.downloads().resolve("test", "track");
        let formats: Vec<DownloadFormat> = result.iter().map(|d| d.format).collect();
        assert_eq!(formats, vec![DownloadFormat::Ogg, DownloadFormat::Wav]);
        assert_eq!(result[0].file, "music/test/download/track.ogg");
        assert_eq!(result[1].file, "music/test/download/track.wav");
    }

    #[test]
    fn resolve_all_formats() {
        let (dir, library) = library();
        let album_dir = album(&dir, "test");
        for ext in ["wav", "mp3", "ogg", "flac"].iter() {
            touch(&album_dir, DOWNLOAD_DIR, &format!("1-01-a.{}", ext));
        }

        let result = library.downloads().resolve("test", "1-01-a");
        let labels: Vec<&str> = result.iter().map(|d| d.format.label()).collect();
        assert_eq!(labels, vec!["MP3", "OGG", "WAV"]);
    }

    #[test]
    fn resolve_ignores_other_base_names_and_directories() {
        let (dir, library) = library();
        let album_dir = album(&dir, "test");
        touch(&album_dir, DOWNLOAD_DIR, "1-02-b.mp3");
        std::fs::create_dir_all(album_dir.join(DOWNLOAD_DIR).join("1-01-a.wav")).unwrap();

        assert!(library.downloads().resolve("test", "1-01-a").is_empty());
    }

    #[test]
    fn resolve_uses_configured_formats_and_mount() {
        let dir = tempfile::tempdir().unwrap();
        let config = LibraryConfig::new(dir.path())
            .public_mount("/assets/")
            .unwrap()
            .download_formats(vec![DownloadFormat::Wav, DownloadFormat::Mp3]);
        let library = MusicLibrary::new(config);
        let album_dir = album(&dir, "test");
        touch(&album_dir, DOWNLOAD_DIR, "x.mp3");
        touch(&album_dir, DOWNLOAD_DIR, "x.ogg");
        touch(&album_dir, DOWNLOAD_DIR, "x.wav");

        let result = library.downloads().resolve("test", "x");
        assert_eq!(
            result,
            vec![
                Download { format: DownloadFormat::Wav, file: "assets/test/download/x.wav".to_owned() },
                Download { format: DownloadFormat::Mp3, file: "assets/test/download/x.mp3".to_owned() },
            ]
        );
    }
}
