//! Parser for `+list-colors --plain` output.

use ghostty_mcp_core::ColorEntry;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lines::parse_each_line;

lazy_static! {
    static ref COLOR_LINE: Regex = Regex::new(r"^(.+?)\s*=\s*(#[0-9a-fA-F]{6})$").unwrap();
}

/// Parse `ghostty +list-colors --plain`, e.g. `palette 0 = #1d2021`.
pub fn parse_color_list(raw: &str) -> Vec<ColorEntry> {
    parse_each_line(raw, "color list", |line| {
        let caps = COLOR_LINE.captures(line)?;
        let name = caps[1].trim();
        if name.is_empty() {
            return None;
        }
        Some(ColorEntry {
            name: name.to_string(),
            hex: caps[2].to_string(),
        })
    })
}
