// Use 3rd party
use log::debug;
use thiserror::Error;

// Use built-in library
use std::env;
use std::path::{Path, PathBuf};

// Use internal modules
use crate::model::DownloadFormat;

pub const LIBRARY_ROOT_VAR: &str = "KNOX_MUSIC_LIBRARY";
pub const PUBLIC_MOUNT_VAR: &str = "KNOX_PUBLIC_MOUNT";
pub const DEFAULT_PUBLIC_MOUNT: &str = "music";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("public mount segment must not be empty")]
    EmptyMount,
}

/// How the tracks of an album are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackOrder {
    /// Whatever order the filesystem lists the streaming directory in.
    Listing,
    /// Disc number, then track number, then file name.
    DiscAndTrack,
}

impl Default for TrackOrder {
    fn default() -> Self {
        Self::DiscAndTrack
    }
}

#[derive(Clone, Debug)]
pub struct LibraryConfig {
    pub(crate) root: PathBuf,
    pub(crate) public_mount: String,
    pub(crate) download_formats: Vec<DownloadFormat>,
    pub(crate) track_order: TrackOrder,
}

impl LibraryConfig {
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            public_mount: DEFAULT_PUBLIC_MOUNT.to_owned(),
            download_formats: DownloadFormat::ALL.to_vec(),
            track_order: TrackOrder::default(),
        }
    }

    /// Reads the library root from `KNOX_MUSIC_LIBRARY` and, when set, the
    /// mount segment from `KNOX_PUBLIC_MOUNT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = env::var_os(LIBRARY_ROOT_VAR).ok_or(ConfigError::MissingVar(LIBRARY_ROOT_VAR))?;
        let config = Self::new(PathBuf::from(root));

        match env::var(PUBLIC_MOUNT_VAR) {
            Ok(mount) => config.public_mount(&mount),
            Err(_) => Ok(config),
        }
    }

    /// Surrounding slashes are stripped, `"/music/"` and `"music"` are the same mount.
    pub fn public_mount(mut self, mount: &str) -> Result<Self, ConfigError> {
        let mount = mount.trim().trim_matches('/');
        if mount.is_empty() {
            return Err(ConfigError::EmptyMount);
        }
        debug!("public mount set to {:?}", mount);
        self.public_mount = mount.to_owned();
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mount(&self) -> &str {
        &self.public_mount
    }

    pub fn formats(&self) -> &[DownloadFormat] {
        &self.download_formats
    }

    pub fn order(&self) -> TrackOrder {
        self.track_order
    }

    pub fn download_formats(mut self, formats: Vec<DownloadFormat>) -> Self {
        self.download_formats = formats;
        self
    }

    pub fn track_order(mut self, order: TrackOrder) -> Self {
        self.track_order = order;
        self
    }
}
