//! Integration tests for the ghostty-mcp system.
//!
//! Runs captured ghostty output through the parsers, the query filters and
//! the text renderers, the same path every tool takes.

use ghostty_mcp::query::{self, FontFilter, OptionLookup};
use ghostty_mcp_parser::{
    parse_action_list, parse_color_list, parse_config_docs, parse_config_values,
    parse_font_list, parse_keybind_list, parse_show_face, parse_theme_list,
};

const CONFIG_DOCS: &str = "\
# The font families to use.
#
# You can generate the list of valid values using the CLI:
#
#     ghostty +list-fonts
#
font-family =
font-family-bold =
font-family-italic =

# Font size in points. This value can be a non-integer and the nearest integer
# pixel size will be selected.
font-size = 13

# The size of the scrollback buffer in bytes.
scrollback-limit = 10000000

# The theme to use.
theme =
";

const FONT_LIST: &str = "\
JetBrains Mono
  JetBrains Mono Regular
  JetBrains Mono Bold
  JetBrains Mono Italic
  JetBrains Mono Bold Italic

Menlo
  Menlo Regular
  Menlo Bold

Symbols Nerd Font Mono
  Symbols Nerd Font Mono Regular
";

const THEME_LIST: &str = "\
3024 Day (resource)
Catppuccin Mocha (resource)
Catppuccin Latte (resource)
my-theme (user)
";

const ACTION_LIST: &str = "\
copy_to_clipboard:
  Copy the selected text to the clipboard.
  Requires a selection.

paste_from_clipboard:
  Paste the contents of the system clipboard.

new_split:
  Create a new split in the given direction.
";

const KEYBIND_LIST: &str = "\
keybind = super+c=copy_to_clipboard
keybind = super+v=paste_from_clipboard
keybind = super+d=new_split:right
keybind = super+shift+d=new_split:down
keybind = super+equal=increase_font_size:1
";

const COLOR_LIST: &str = "\
alice blue = #f0f8ff
antique white = #faebd7
AliceBlue = #f0f8ff
dark slate gray = #2f4f4f
";

const SHOW_FACE: &str = "\
U+68 « h » found in face \"JetBrains Mono\".
U+69 « i » found in face \"JetBrains Mono\".
U+1F600 « 😀 » found in face \"Apple Color Emoji\".
";

#[test]
fn test_config_docs_search_flow() {
    let entries = parse_config_docs(CONFIG_DOCS);
    assert_eq!(entries.len(), 6);

    let matches = query::search_config_docs(&entries, "font", 10);
    let keys: Vec<&str> = matches.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["font-family", "font-family-bold", "font-family-italic", "font-size"]
    );

    let text = query::render_config_docs(&matches[..1]);
    assert!(text.starts_with("## font-family\nDefault: `(empty)`\n\nThe font families to use."));
    assert!(text.contains("\n\n    ghostty +list-fonts"));

    let text = query::render_config_docs(&query::search_config_docs(&entries, "bytes", 10));
    assert_eq!(
        text,
        "## scrollback-limit\nDefault: `10000000`\n\nThe size of the scrollback buffer in bytes."
    );
}

#[test]
fn test_grouped_keys_share_one_doc_block() {
    let entries = parse_config_docs(CONFIG_DOCS);
    let bold = entries.iter().find(|e| e.key == "font-family-bold").unwrap();
    assert_eq!(bold.docs, "");

    match query::lookup_config_option(&entries, "FONT-FAMILY-ITALIC") {
        OptionLookup::Found(entry) => assert_eq!(entry.key, "font-family-italic"),
        other => panic!("unexpected lookup result: {other:?}"),
    }
    match query::lookup_config_option(&entries, "font-fam") {
        OptionLookup::Ambiguous(keys) => assert_eq!(keys.len(), 3),
        other => panic!("unexpected lookup result: {other:?}"),
    }
}

#[test]
fn test_current_config_flow() {
    let values = parse_config_values("font-size = 14\ntheme = dark:Catppuccin Mocha,light:Catppuccin Latte\n");
    assert_eq!(
        query::render_config_values(&values),
        "font-size = 14\ntheme = dark:Catppuccin Mocha,light:Catppuccin Latte"
    );
}

#[test]
fn test_font_flow() {
    let families = parse_font_list(FONT_LIST);
    assert_eq!(families.len(), 3);

    let italic = query::filter_fonts(
        families.clone(),
        &FontFilter {
            italic: true,
            ..Default::default()
        },
    );
    assert_eq!(italic.len(), 1);

    let bold_faces = query::filter_fonts(
        families,
        &FontFilter {
            style: Some("bold".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(
        query::render_fonts(&bold_faces),
        "JetBrains Mono\n  JetBrains Mono Bold\n  JetBrains Mono Bold Italic\n\nMenlo\n  Menlo Bold"
    );
}

#[test]
fn test_theme_flow() {
    let themes = query::filter_themes(parse_theme_list(THEME_LIST), Some("catppuccin"));
    assert_eq!(
        query::render_themes(&themes),
        "Catppuccin Mocha (resource)\nCatppuccin Latte (resource)"
    );

    let user = query::filter_themes(parse_theme_list(THEME_LIST), Some("my-"));
    assert_eq!(query::render_themes(&user), "my-theme (user)");
}

#[test]
fn test_action_flow() {
    let actions = parse_action_list(ACTION_LIST);
    assert_eq!(actions.len(), 3);
    assert_eq!(
        actions[0].docs,
        "Copy the selected text to the clipboard.\nRequires a selection."
    );

    let clipboard = query::filter_actions(actions, Some("CLIPBOARD"));
    assert_eq!(clipboard.len(), 2);
    assert!(query::render_actions(&clipboard).starts_with("**copy_to_clipboard**\nCopy"));
}

#[test]
fn test_keybind_flow() {
    let keybinds = parse_keybind_list(KEYBIND_LIST);
    assert_eq!(keybinds.len(), 5);

    let splits = query::filter_keybinds(keybinds.clone(), Some("down"));
    assert_eq!(query::render_keybinds(&splits), "super+shift+d → new_split:down");

    let font = query::filter_keybinds(keybinds, Some("equal"));
    assert_eq!(query::render_keybinds(&font), "super+equal → increase_font_size:1");
}

#[test]
fn test_color_flow() {
    let colors = query::filter_colors(parse_color_list(COLOR_LIST), Some("alice"));
    assert_eq!(
        query::render_colors(&colors),
        "alice blue = #f0f8ff\nAliceBlue = #f0f8ff"
    );
    assert!(query::filter_colors(parse_color_list(COLOR_LIST), Some("crimson")).is_empty());
}

#[test]
fn test_show_face_flow() {
    let faces = parse_show_face(SHOW_FACE);
    assert_eq!(
        query::render_faces(&faces),
        "U+68 « h » → JetBrains Mono\nU+69 « i » → JetBrains Mono\nU+1F600 « 😀 » → Apple Color Emoji"
    );
}
