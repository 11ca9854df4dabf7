//! Knox Audio builds album descriptions for a web player.
//!
//! An album is a directory under the music library root. Its `album.yaml`
//! manifest supplies the metadata, the tracks are whatever sits in its
//! `streaming` directory and optional renditions are picked up from its
//! `download` directory.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! knox-audio = "0.1.0"
//! ```
//!
//! ## Library layout
//!
//! ```text
//! <root>/<album>/album.yaml
//! <root>/<album>/streaming/1-01-ozone-and-rot.ogg
//! <root>/<album>/download/1-01-ozone-and-rot.mp3
//! ```
//!
//! Streaming files must be named `<disc>-<track>-<web-safe-title>.ogg`, other
//! entries are skipped. Every path in the result is relative to the library
//! root and prefixed with the public mount segment, `music/` by default.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! knox-audio = { version = "0.1.0" }
//! dotenv = "0.15"
//! ```
//!
//! ```rust,no_run
//! use knox_audio::config::LibraryConfig;
//! use knox_audio::library::MusicLibrary;
//! use dotenv::dotenv;
//!
//! fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     // KNOX_MUSIC_LIBRARY points at the library root.
//!     let config = LibraryConfig::from_env().unwrap();
//!
//!     let library = MusicLibrary::new(config);
//!     let album = library.album("ozone-and-rot").unwrap();
//!     println!("{}", album.to_json_pretty().unwrap());
//! }
//! ```

pub mod config;
pub mod library;
pub mod model;
pub mod scan;
