// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::library::LibraryResult;
use crate::model::track::Track;

// album.yaml example:
//albumTitle: "Ozone and Rot"
//artist: "The Knox Collective"
//assetBaseUrl: "https://assets.example.com/"
//artwork: "cover.jpg"
//ui:
  //albumMode: { showNextPrev: true, showVolume: true }
  //ambientMode: { showNextPrev: false, showVolume: true }

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_title: Option<String>,
    pub artist: Option<String>,
    pub asset_base_url: Option<String>,
    pub artwork: Option<String>,
    pub ui: Option<UiConfig>,
    // Always derived from the streaming directory, never read from the manifest.
    #[serde(skip_deserializing)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn to_json(&self) -> LibraryResult<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    pub fn to_json_pretty(&self) -> LibraryResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub album_mode: ModeConfig,
    pub ambient_mode: ModeConfig,
}

/// Visibility of the transport controls in one player mode.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModeConfig {
    pub show_next_prev: bool,
    pub show_volume: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::track::SourceInfo;

    #[test]
    fn deserialize_manifest() {
        let manifest = r#"
albumTitle: "Test"
artist: "Someone"
assetBaseUrl: "https://cdn.example.com/"
artwork: "cover.png"
ui:
  albumMode:
    showNextPrev: true
    showVolume: true
  ambientMode:
    showNextPrev: false
    showVolume: true
"#;
        let album: Album = serde_yaml::from_str(manifest).unwrap();
        assert_eq!(album.album_title.as_deref(), Some("Test"));
        assert_eq!(album.artist.as_deref(), Some("Someone"));
        assert_eq!(album.asset_base_url.as_deref(), Some("https://cdn.example.com/"));
        assert_eq!(album.artwork.as_deref(), Some("cover.png"));

        let ui = album.ui.unwrap();
        assert_eq!(ui.album_mode, ModeConfig { show_next_prev: true, show_volume: true });
        assert_eq!(ui.ambient_mode, ModeConfig { show_next_prev: false, show_volume: true });
        assert!(album.tracks.is_empty());
    }

    #[test]
    fn deserialize_ignores_tracks_key() {
        let manifest = r#"
albumTitle: "Test"
tracks:
  - title: "Should not appear"
"#;
        let album: Album = serde_yaml::from_str(manifest).unwrap();
        assert!(album.tracks.is_empty());
    }

    #[test]
    fn missing_mode_flags_default_to_false() {
        let manifest = r#"
ui:
  albumMode:
    showVolume: true
"#;
        let album: Album = serde_yaml::from_str(manifest).unwrap();
        let ui = album.ui.unwrap();
        assert_eq!(ui.album_mode, ModeConfig { show_next_prev: false, show_volume: true });
        assert_eq!(ui.ambient_mode, ModeConfig::default());
    }

    #[test]
    fn serialize_uses_manifest_field_names() {
        let album = Album {
            album_title: Some("Test".to_owned()),
            ui: Some(UiConfig::default()),
            tracks: vec![Track {
                title: "Ozone And Rot".to_owned(),
                sources: SourceInfo {
                    stream: "music/test/streaming/1-01-ozone-and-rot.ogg".to_owned(),
                    downloads: Vec::new(),
                },
                ..Default::default()
            }],
            ..Default::default()
        };

        let value: serde_json::Value = serde_json::from_str(&album.to_json().unwrap()).unwrap();
        assert_eq!(value["albumTitle"], "Test");
        assert!(value["artist"].is_null());
        assert!(value["assetBaseUrl"].is_null());
        assert_eq!(value["ui"]["albumMode"]["showNextPrev"], false);
        assert_eq!(value["ui"]["ambientMode"]["showVolume"], false);
        assert_eq!(value["tracks"][0]["title"], "Ozone And Rot");
        assert_eq!(
            value["tracks"][0]["sources"]["stream"],
            "music/test/streaming/1-01-ozone-and-rot.ogg"
        );
    }
}
