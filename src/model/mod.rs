pub mod album;
pub mod track;

use serde::{Deserialize, Serialize};

/// Renditions that may sit next to a track in the `download` directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DownloadFormat {
    Mp3,
    Ogg,
    Wav,
}

impl DownloadFormat {
    /// Default probe set, in output order.
    pub const ALL: [DownloadFormat; 3] = [Self::Mp3, Self::Ogg, Self::Wav];

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Wav => "wav",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Ogg => "OGG",
            Self::Wav => "WAV",
        }
    }
}
