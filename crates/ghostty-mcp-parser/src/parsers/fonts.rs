//! Parser for `+list-fonts` output.

use ghostty_mcp_core::FontFamily;
use tracing::trace;

use crate::lines::lines;

/// Indentation marking a face line.
const FACE_INDENT: &str = "  ";

/// Parse `ghostty +list-fonts`.
///
/// ```text
/// JetBrains Mono
///   JetBrains Mono Regular
///   JetBrains Mono Bold
///
/// Fira Code
///   Fira Code Regular
/// ```
///
/// An unindented line opens a family, a line indented by two spaces adds a
/// face to it, and a blank line closes it. Faces seen with no open family are
/// dropped.
pub fn parse_font_list(raw: &str) -> Vec<FontFamily> {
    let mut families = Vec::new();
    let mut current: Option<FontFamily> = None;

    for line in lines(raw) {
        if line.trim().is_empty() {
            families.extend(current.take());
        } else if line.starts_with(FACE_INDENT) {
            match current.as_mut() {
                Some(family) => family.faces.push(line.trim().to_string()),
                None => trace!("font list: face {:?} has no family", line.trim()),
            }
        } else {
            families.extend(current.replace(FontFamily::new(line.trim())));
        }
    }
    families.extend(current);

    families
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_font_list("").is_empty());
        assert!(parse_font_list("\n\n").is_empty());
    }

    #[test]
    fn test_two_families() {
        let families = parse_font_list("Family A\n  Regular\n  Bold\n\nFamily B\n  Italic\n");
        assert_eq!(families.len(), 2);
        assert_eq!(families[0].family, "Family A");
        assert_eq!(families[0].faces, vec!["Regular", "Bold"]);
        assert_eq!(families[1].family, "Family B");
        assert_eq!(families[1].faces, vec!["Italic"]);
    }

    #[test]
    fn test_family_without_blank_separator() {
        let families = parse_font_list("Family A\n  Regular\nFamily B\n  Bold");
        assert_eq!(families.len(), 2);
        assert_eq!(families[0].faces, vec!["Regular"]);
        assert_eq!(families[1].faces, vec!["Bold"]);
    }

    #[test]
    fn test_family_with_no_faces() {
        let families = parse_font_list("Lonely\n\nFamily B\n  Bold\n");
        assert_eq!(families.len(), 2);
        assert_eq!(families[0], FontFamily::new("Lonely"));
    }

    #[test]
    fn test_orphan_face_discarded() {
        let families = parse_font_list("  Orphan Face\nFamily A\n  Regular\n");
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].faces, vec!["Regular"]);
    }

    #[test]
    fn test_whitespace_only_line_closes_family() {
        let families = parse_font_list("Family A\n  Regular\n   \n  Stray\n");
        assert_eq!(families.len(), 1);
        assert_eq!(families[0].faces, vec!["Regular"]);
    }

    #[test]
    fn test_crlf_input() {
        let families = parse_font_list("Family A\r\n  Regular\r\n\r\nFamily B\r\n  Bold\r\n");
        assert_eq!(families.len(), 2);
        assert_eq!(families[0].faces, vec!["Regular"]);
        assert_eq!(families[1].family, "Family B");
    }

    #[test]
    fn test_face_names_keep_internal_spaces() {
        let families = parse_font_list("Iosevka\n    Iosevka Extended Bold Italic  \n");
        assert_eq!(families[0].faces, vec!["Iosevka Extended Bold Italic"]);
    }
}
