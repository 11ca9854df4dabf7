pub mod albums;
pub(crate) mod downloads;
pub mod filename;
pub mod title;
pub mod tracks;

use thiserror::Error;

use crate::library::MusicLibrary;
use crate::scan::albums::*;
use crate::scan::downloads::*;
use crate::scan::tracks::*;

/// Why a streaming-directory entry did not become a track.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("name does not follow <disc>-<track>-<title>.ogg")]
    NotATrackFile,
    #[error("disc or track number does not fit in 32 bits")]
    NumberOutOfRange,
    #[error("title has no words")]
    EmptyTitle,
    #[error("name is not valid UTF-8")]
    NonUtf8Name,
}

// Scan function namespaces

impl MusicLibrary {
    pub const fn albums(&self) -> Albums {
        Albums(self)
    }

    pub(crate) const fn downloads(&self) -> Downloads {
        Downloads(self)
    }

    pub const fn tracks(&self) -> Tracks {
        Tracks(self)
    }
}
