//! Track filename convention, `<disc>-<track>-<web-safe-title>.ogg`

use regex::Regex;

use std::sync::OnceLock;

use crate::scan::Rejection;

pub const TRACK_EXTENSION: &str = "ogg";

fn track_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([0-9]+)-([0-9]+)-(.+)\.ogg$").expect("track file pattern"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedFileName<'a> {
    pub disc_number: u32,
    pub track_number: u32,
    pub web_safe_title: &'a str,
    file_name: &'a str,
}

impl<'a> ParsedFileName<'a> {
    pub fn file_name(&self) -> &'a str {
        self.file_name
    }

    /// The file name without its `.ogg` extension.
    pub fn base_name(&self) -> &'a str {
        let end = self.file_name.len() - TRACK_EXTENSION.len() - 1;
        &self.file_name[..end]
    }
}

pub fn parse_file_name(file_name: &str) -> Result<ParsedFileName<'_>, Rejection> {
    let caps = track_file_pattern()
        .captures(file_name)
        .ok_or(Rejection::NotATrackFile)?;

    // All three groups are mandatory in the pattern.
    let group = |i| caps.get(i).map_or("", |m| m.as_str());
    let disc_number = group(1).parse().map_err(|_| Rejection::NumberOutOfRange)?;
    let track_number = group(2).parse().map_err(|_| Rejection::NumberOutOfRange)?;

    Ok(ParsedFileName {
        disc_number,
        track_number,
        web_safe_title: group(3),
        file_name,
    })
}
