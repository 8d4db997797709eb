//! Parsers for `+show-config` output, with and without documentation.

use ghostty_mcp_core::{ConfigDocEntry, ConfigValue};
use tracing::trace;

use crate::lines::{lines, parse_each_line, split_assignment};

/// Comment lines collected since the last emitted key.
#[derive(Debug, Default)]
struct DocBlock<'a> {
    lines: Vec<&'a str>,
}

impl<'a> DocBlock<'a> {
    fn push(&mut self, line: &'a str) {
        self.lines.push(line);
    }

    /// Joined and trimmed text; leaves the block empty for the next key.
    fn take(&mut self) -> String {
        let docs = self.lines.join("\n").trim().to_string();
        self.lines.clear();
        docs
    }
}

/// Parse `ghostty +show-config --default --docs`.
///
/// The output is a run of blocks, each made of `# ` comment lines followed by
/// a `key = value` line. A bare `#` is a blank line inside the doc text, and
/// blank lines between blocks are ignored.
///
/// When several keys follow one doc block (ghostty groups variants such as
/// `font-family`, `font-family-bold`, ... this way) only the first key gets
/// the text; the rest of the run gets empty docs.
pub fn parse_config_docs(raw: &str) -> Vec<ConfigDocEntry> {
    let mut entries = Vec::new();
    let mut block = DocBlock::default();

    for line in lines(raw) {
        if let Some(text) = line.strip_prefix("# ") {
            block.push(text);
        } else if line == "#" {
            block.push("");
        } else if line.trim().is_empty() {
            continue;
        } else if let Some((key, default_value)) = split_assignment(line) {
            entries.push(ConfigDocEntry {
                key,
                default_value,
                docs: block.take(),
            });
        } else {
            trace!("config docs: skipping unrecognized line {:?}", line);
        }
    }

    entries
}

/// Parse `ghostty +show-config` (optionally `--changes-only`).
///
/// Every line holding an `=` is split at the first one; nothing else is read.
pub fn parse_config_values(raw: &str) -> Vec<ConfigValue> {
    parse_each_line(raw, "config values", |line| {
        split_assignment(line).map(|(key, value)| ConfigValue { key, value })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(key: &str, default_value: &str, docs: &str) -> ConfigDocEntry {
        ConfigDocEntry {
            key: key.to_string(),
            default_value: default_value.to_string(),
            docs: docs.to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_config_docs("").is_empty());
        assert!(parse_config_values("").is_empty());
        assert!(parse_config_docs("  \n\n \t\n").is_empty());
    }

    #[test]
    fn test_single_block() {
        let raw = "# First line.\n# Second line.\nfoo = bar\n";
        assert_eq!(
            parse_config_docs(raw),
            vec![doc("foo", "bar", "First line.\nSecond line.")]
        );
    }

    #[test]
    fn test_bare_hash_is_blank_doc_line() {
        let raw = "# Paragraph one.\n#\n# Paragraph two.\nscrollback-limit = 10000000\n";
        let entries = parse_config_docs(raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].docs, "Paragraph one.\n\nParagraph two.");
        assert_eq!(entries[0].default_value, "10000000");
    }

    #[test]
    fn test_grouped_keys_share_first_doc_block() {
        let raw = concat!(
            "# The font families to use.\n",
            "font-family = \n",
            "font-family-bold = \n",
            "font-family-italic = \n",
            "\n",
            "# Font size in points.\n",
            "font-size = 13\n",
        );
        assert_eq!(
            parse_config_docs(raw),
            vec![
                doc("font-family", "", "The font families to use."),
                doc("font-family-bold", "", ""),
                doc("font-family-italic", "", ""),
                doc("font-size", "13", "Font size in points."),
            ]
        );
    }

    #[test]
    fn test_blank_lines_do_not_reset_docs() {
        let raw = "# Docs for the key.\n\n\nkey = value\n";
        assert_eq!(
            parse_config_docs(raw),
            vec![doc("key", "value", "Docs for the key.")]
        );
    }

    #[test]
    fn test_value_split_at_first_equals() {
        let raw = "# Bindings.\nkeybind = ctrl+a=new_tab\n";
        assert_eq!(
            parse_config_docs(raw),
            vec![doc("keybind", "ctrl+a=new_tab", "Bindings.")]
        );
    }

    #[test]
    fn test_docs_keep_indentation_inside_text() {
        let raw = "# Example:\n#\n#     theme = dark:x,light:y\n#\ntheme = \n";
        let entries = parse_config_docs(raw);
        assert_eq!(entries[0].docs, "Example:\n\n    theme = dark:x,light:y");
    }

    #[test]
    fn test_crlf_input() {
        let raw = "# Docs.\r\n#\r\n# More.\r\nfoo = bar\r\n";
        assert_eq!(parse_config_docs(raw), vec![doc("foo", "bar", "Docs.\n\nMore.")]);
    }

    #[test]
    fn test_unrecognized_lines_skipped() {
        let raw = "#not-a-doc-line\n# Real docs.\nwarning: something odd\nfoo = 1\n";
        assert_eq!(parse_config_docs(raw), vec![doc("foo", "1", "Real docs.")]);
    }

    #[test]
    fn test_hash_prefixed_assignment_is_a_key() {
        let raw = "# Docs.\n#foo = bar\nnext = 1\n";
        assert_eq!(
            parse_config_docs(raw),
            vec![doc("#foo", "bar", "Docs."), doc("next", "1", "")]
        );
    }

    #[test]
    fn test_config_values() {
        let raw = "font-size = 14\ntheme = dark:Builtin Dark,light:Builtin Light\nnot a value\n\nkeybind = ctrl+a=new_tab\n";
        let values = parse_config_values(raw);
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].key, "font-size");
        assert_eq!(values[0].value, "14");
        assert_eq!(values[1].value, "dark:Builtin Dark,light:Builtin Light");
        assert_eq!(values[2].key, "keybind");
        assert_eq!(values[2].value, "ctrl+a=new_tab");
    }

    #[test]
    fn test_config_values_have_no_comment_handling() {
        let values = parse_config_values("# a = b\n");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].key, "# a");
    }
}
