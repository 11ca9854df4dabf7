// Use 3rd party
use serde::{Deserialize, Serialize};

use crate::model::DownloadFormat;

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub sources: SourceInfo,
    // Parsed from the filename and kept for callers; not part of the payload.
    #[serde(skip)]
    pub disc_number: u32,
    #[serde(skip)]
    pub track_number: u32,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub stream: String,
    pub downloads: Vec<Download>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Download {
    pub format: DownloadFormat,
    pub file: String,
}
