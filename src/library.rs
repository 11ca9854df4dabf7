// Use 3rd party
use log::{error, warn};
use thiserror::Error;

// Use built-in library
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

// Use internal modules
use crate::config::LibraryConfig;
use crate::model::album::Album;

pub const MANIFEST_FILE: &str = "album.yaml";
pub const STREAMING_DIR: &str = "streaming";
pub const DOWNLOAD_DIR: &str = "download";

// Possible errors returned from an album lookup.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("album not found: {0}")]
    NotFound(String),
    #[error("manifest error in {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json serialize error: {0}")]
    ParseJSON(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest file is missing")]
    Missing,
    #[error("unable to read manifest: {0}")]
    Read(#[from] io::Error),
    #[error("manifest is empty")]
    Empty,
    #[error("malformed manifest: {0}")]
    Malformed(#[from] serde_yaml::Error),
}

impl LibraryError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;

// Music library on disk
#[derive(Clone, Debug)]
pub struct MusicLibrary {
    config: LibraryConfig,
}

impl MusicLibrary {
    #[must_use]
    pub fn new(config: LibraryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        self.config.root()
    }

    /// Shorthand for `self.albums().get(name)`.
    pub fn album(&self, name: &str) -> LibraryResult<Album> {
        self.albums().get(name)
    }

    pub(crate) fn album_path(&self, album: &str) -> PathBuf {
        self.config.root.join(album)
    }

    /// Public path of a file inside an album, `<mount>/<album>/<dir>/<file>`.
    pub(crate) fn public_path(&self, album: &str, dir: &str, file_name: &str) -> String {
        [self.config.mount(), album, dir, file_name].join("/")
    }

    /// Resolves an album name to its directory. Names that are not a single
    /// plain path component are treated as absent.
    pub(crate) fn album_dir(&self, name: &str) -> LibraryResult<PathBuf> {
        if !is_single_component(name) {
            warn!("refusing album name {:?}", name);
            return Err(LibraryError::NotFound(name.to_owned()));
        }

        let path = self.album_path(name);
        if path.is_dir() {
            Ok(path)
        } else {
            Err(LibraryError::NotFound(name.to_owned()))
        }
    }

    pub(crate) fn read_manifest(&self, album_dir: &Path) -> LibraryResult<Album> {
        let path = album_dir.join(MANIFEST_FILE);
        Self::convert_manifest(&path).map_err(|source| {
            error!("unable to load {}: {}", path.display(), source);
            LibraryError::Manifest { path, source }
        })
    }

    fn convert_manifest(path: &Path) -> Result<Album, ManifestError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(ManifestError::Missing),
            Err(err) => return Err(err.into()),
        };

        // An empty or comment-only document parses as null.
        let document = serde_yaml::from_str::<serde_yaml::Value>(&contents)?;
        if document.is_null() {
            return Err(ManifestError::Empty);
        }
        serde_yaml::from_value::<Album>(document).map_err(Into::into)
    }
}

fn is_single_component(name: &str) -> bool {
    // Separators are refused outright, `components()` would hide a trailing one.
    if name.contains(|c: char| c == '/' || c == '\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
