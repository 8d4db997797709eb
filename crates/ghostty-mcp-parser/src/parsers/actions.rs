//! Parser for `+list-actions --docs` output.

use ghostty_mcp_core::ActionEntry;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lines::lines;

lazy_static! {
    static ref ACTION_HEADER: Regex = Regex::new(r"^([0-9A-Za-z_]+):$").unwrap();
}

/// Indentation marking a documentation line.
const DOC_INDENT: &str = "  ";

/// Action header seen, doc lines still being collected.
struct PendingAction<'a> {
    action: &'a str,
    doc_lines: Vec<&'a str>,
}

impl<'a> PendingAction<'a> {
    fn new(action: &'a str) -> Self {
        Self {
            action,
            doc_lines: Vec::new(),
        }
    }

    fn finish(self) -> ActionEntry {
        ActionEntry {
            action: self.action.to_string(),
            docs: self.doc_lines.join("\n").trim().to_string(),
        }
    }
}

/// Parse `ghostty +list-actions --docs`.
///
/// ```text
/// copy_to_clipboard:
///   Copy the selected text to the clipboard.
///
/// paste_from_clipboard:
///   Paste the contents of the clipboard.
/// ```
///
/// An `identifier:` line opens an action; following lines indented by two
/// spaces are its docs. Anything else is ignored.
pub fn parse_action_list(raw: &str) -> Vec<ActionEntry> {
    let mut entries = Vec::new();
    let mut current: Option<PendingAction> = None;

    for line in lines(raw) {
        if let Some(caps) = ACTION_HEADER.captures(line) {
            let header = caps.get(1).map_or("", |m| m.as_str());
            if let Some(done) = current.replace(PendingAction::new(header)) {
                entries.push(done.finish());
            }
        } else if let (Some(pending), Some(text)) =
            (current.as_mut(), line.strip_prefix(DOC_INDENT))
        {
            pending.doc_lines.push(text);
        }
    }
    entries.extend(current.map(PendingAction::finish));

    entries
}
