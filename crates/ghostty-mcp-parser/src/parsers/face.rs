//! Parser for `+show-face` output.

use ghostty_mcp_core::FaceEntry;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lines::parse_each_line;

lazy_static! {
    /// `U+41 « A » found in face "JetBrains Mono".`, with straight or curly
    /// quotes around the face name.
    static ref FACE_LINE: Regex = Regex::new(
        r#"^(U\+[0-9A-Fa-f]+)\s+«\s+(.+?)\s+»\s+found in face\s+["“](.+?)["”]"#
    )
    .unwrap();
}

/// Parse `ghostty +show-face --cp=...` or `--string=...`.
///
/// The glyph is kept exactly as captured since it may itself be whitespace.
pub fn parse_show_face(raw: &str) -> Vec<FaceEntry> {
    parse_each_line(raw, "show face", |line| {
        let caps = FACE_LINE.captures(line)?;
        let face = caps[3].trim();
        if face.is_empty() {
            return None;
        }
        Some(FaceEntry {
            codepoint: caps[1].to_string(),
            character: caps[2].to_string(),
            face: face.to_string(),
        })
    })
}
