//! Parser for `+list-themes --plain` output.

use ghostty_mcp_core::ThemeEntry;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lines::parse_each_line;

lazy_static! {
    /// `<name> (<source>)`, the source being one word at the end of the line.
    static ref THEME_LINE: Regex = Regex::new(r"^(.+?)\s+\(([0-9A-Za-z_]+)\)$").unwrap();
}

/// Parse `ghostty +list-themes --plain`, e.g. `Solarized Dark (resource)`.
pub fn parse_theme_list(raw: &str) -> Vec<ThemeEntry> {
    parse_each_line(raw, "theme list", |line| {
        let caps = THEME_LINE.captures(line)?;
        let name = caps[1].trim();
        if name.is_empty() {
            return None;
        }
        Some(ThemeEntry {
            name: name.to_string(),
            source: caps[2].to_string(),
        })
    })
}
