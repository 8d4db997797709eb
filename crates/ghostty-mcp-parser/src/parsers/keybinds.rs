//! Parser for `+list-keybinds --plain` output.

use ghostty_mcp_core::KeybindEntry;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lines::parse_each_line;

lazy_static! {
    /// `keybind = <keys>=<action>[:<params>]`. The trigger itself may contain
    /// `=`, so it is matched lazily up to the `=` that precedes a bare action.
    static ref KEYBIND_LINE: Regex =
        Regex::new(r"^keybind\s*=\s*(.+?)=([0-9A-Za-z_]+)(?::(.+))?$").unwrap();
}

/// Parse `ghostty +list-keybinds --plain`.
pub fn parse_keybind_list(raw: &str) -> Vec<KeybindEntry> {
    parse_each_line(raw, "keybind list", |line| {
        let caps = KEYBIND_LINE.captures(line)?;
        let keys = caps[1].trim();
        if keys.is_empty() {
            return None;
        }
        let params = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|params| !params.is_empty())
            .map(str::to_string);
        Some(KeybindEntry {
            keys: keys.to_string(),
            action: caps[2].to_string(),
            params,
        })
    })
}
