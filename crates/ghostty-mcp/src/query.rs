//! Filtering and text rendering applied to parsed records.
//!
//! Everything here is pure so the MCP handlers stay thin: they run ghostty,
//! parse, then hand the records to these functions.

use ghostty_mcp_core::{
    ActionEntry, ColorEntry, ConfigDocEntry, ConfigValue, FaceEntry, FontFamily, KeybindEntry,
    ThemeEntry,
};

/// Case-insensitive substring test; `needle` must already be lowercase.
fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Lowercased, non-empty search term.
fn search_term(search: Option<&str>) -> Option<String> {
    search
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}

// =============================================================================
// Config docs
// =============================================================================

/// Entries whose key or docs contain `keyword`, at most `max_results`.
pub fn search_config_docs<'a>(
    entries: &'a [ConfigDocEntry],
    keyword: &str,
    max_results: usize,
) -> Vec<&'a ConfigDocEntry> {
    let needle = keyword.to_lowercase();
    entries
        .iter()
        .filter(|e| contains_lower(&e.key, &needle) || contains_lower(&e.docs, &needle))
        .take(max_results)
        .collect()
}

/// Outcome of looking up a single config option.
#[derive(Debug, PartialEq, Eq)]
pub enum OptionLookup<'a> {
    /// One option matched
    Found(&'a ConfigDocEntry),
    /// Several options contain the requested key
    Ambiguous(Vec<&'a str>),
    /// Nothing matched
    NotFound,
}

/// Find an option by exact key, then case-insensitive key, then unique
/// substring.
pub fn lookup_config_option<'a>(entries: &'a [ConfigDocEntry], key: &str) -> OptionLookup<'a> {
    if let Some(entry) = entries.iter().find(|e| e.key == key) {
        return OptionLookup::Found(entry);
    }

    let needle = key.to_lowercase();
    if let Some(entry) = entries.iter().find(|e| e.key.to_lowercase() == needle) {
        return OptionLookup::Found(entry);
    }

    let candidates: Vec<&ConfigDocEntry> = entries
        .iter()
        .filter(|e| contains_lower(&e.key, &needle))
        .collect();
    match candidates.as_slice() {
        [] => OptionLookup::NotFound,
        [only] => OptionLookup::Found(*only),
        many => OptionLookup::Ambiguous(many.iter().map(|e| e.key.as_str()).collect()),
    }
}

/// `## key`, the default value, then the docs.
pub fn render_config_doc(entry: &ConfigDocEntry) -> String {
    let default_value = if entry.default_value.is_empty() {
        "(empty)"
    } else {
        &entry.default_value
    };
    format!("## {}\nDefault: `{}`\n\n{}", entry.key, default_value, entry.docs)
}

/// Several entries separated by horizontal rules.
pub fn render_config_docs(entries: &[&ConfigDocEntry]) -> String {
    entries
        .iter()
        .map(|entry| render_config_doc(entry))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Text answer for a single-option lookup.
pub fn render_option_lookup(key: &str, lookup: &OptionLookup<'_>) -> String {
    match lookup {
        OptionLookup::Found(entry) => render_config_doc(entry),
        OptionLookup::Ambiguous(keys) => format!(
            "Multiple config options match \"{key}\": {}\n\nPlease specify the exact key.",
            keys.join(", ")
        ),
        OptionLookup::NotFound => format!("Config option \"{key}\" not found."),
    }
}

/// `key = value` per line.
pub fn render_config_values(values: &[ConfigValue]) -> String {
    values
        .iter()
        .map(|v| format!("{} = {}", v.key, v.value))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Fonts
// =============================================================================

/// Criteria for narrowing the font list.
#[derive(Debug, Clone, Default)]
pub struct FontFilter {
    /// Substring of the family name
    pub family: Option<String>,
    /// Keep families with a bold face
    pub bold: bool,
    /// Keep families with an italic face
    pub italic: bool,
    /// Keep only faces containing this, dropping families left without faces
    pub style: Option<String>,
}

/// Apply a [`FontFilter`].
pub fn filter_fonts(families: Vec<FontFamily>, filter: &FontFilter) -> Vec<FontFamily> {
    let family_term = search_term(filter.family.as_deref());
    let style_term = search_term(filter.style.as_deref());

    families
        .into_iter()
        .filter(|f| {
            family_term
                .as_deref()
                .map_or(true, |term| contains_lower(&f.family, term))
        })
        .filter(|f| !filter.bold || f.has_face_containing("bold"))
        .filter(|f| !filter.italic || f.has_face_containing("italic"))
        .filter_map(|mut f| match style_term.as_deref() {
            Some(term) => {
                f.faces.retain(|face| contains_lower(face, term));
                (!f.faces.is_empty()).then_some(f)
            }
            None => Some(f),
        })
        .collect()
}

/// Family names with their faces indented underneath.
pub fn render_fonts(families: &[FontFamily]) -> String {
    families
        .iter()
        .map(|f| {
            let mut block = f.family.clone();
            for face in &f.faces {
                block.push_str("\n  ");
                block.push_str(face);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// =============================================================================
// Themes, actions, keybinds, colors, faces
// =============================================================================

/// Themes whose name contains `search`.
pub fn filter_themes(themes: Vec<ThemeEntry>, search: Option<&str>) -> Vec<ThemeEntry> {
    match search_term(search) {
        Some(term) => themes
            .into_iter()
            .filter(|t| contains_lower(&t.name, &term))
            .collect(),
        None => themes,
    }
}

/// `name (source)` per line.
pub fn render_themes(themes: &[ThemeEntry]) -> String {
    themes
        .iter()
        .map(|t| format!("{} ({})", t.name, t.source))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Actions whose name or docs contain `search`.
pub fn filter_actions(actions: Vec<ActionEntry>, search: Option<&str>) -> Vec<ActionEntry> {
    match search_term(search) {
        Some(term) => actions
            .into_iter()
            .filter(|a| contains_lower(&a.action, &term) || contains_lower(&a.docs, &term))
            .collect(),
        None => actions,
    }
}

/// Bold action name followed by its docs, one block per action.
pub fn render_actions(actions: &[ActionEntry]) -> String {
    actions
        .iter()
        .map(|a| format!("**{}**\n{}", a.action, a.docs))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Keybinds whose keys, action or params contain `search`.
pub fn filter_keybinds(keybinds: Vec<KeybindEntry>, search: Option<&str>) -> Vec<KeybindEntry> {
    match search_term(search) {
        Some(term) => keybinds
            .into_iter()
            .filter(|k| {
                contains_lower(&k.keys, &term)
                    || contains_lower(&k.action, &term)
                    || k.params
                        .as_deref()
                        .map_or(false, |params| contains_lower(params, &term))
            })
            .collect(),
        None => keybinds,
    }
}

/// `keys → action[:params]` per line.
pub fn render_keybinds(keybinds: &[KeybindEntry]) -> String {
    keybinds
        .iter()
        .map(|k| format!("{} → {}", k.keys, k.action_with_params()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colors whose name contains `search`.
pub fn filter_colors(colors: Vec<ColorEntry>, search: Option<&str>) -> Vec<ColorEntry> {
    match search_term(search) {
        Some(term) => colors
            .into_iter()
            .filter(|c| contains_lower(&c.name, &term))
            .collect(),
        None => colors,
    }
}

/// `name = #rrggbb` per line.
pub fn render_colors(colors: &[ColorEntry]) -> String {
    colors
        .iter()
        .map(|c| format!("{} = {}", c.name, c.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `U+XX « c » → face` per line.
pub fn render_faces(faces: &[FaceEntry]) -> String {
    faces
        .iter()
        .map(|f| format!("{} « {} » → {}", f.codepoint, f.character, f.face))
        .collect::<Vec<_>>()
        .join("\n")
}
