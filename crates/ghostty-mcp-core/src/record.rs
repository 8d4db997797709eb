//! Records parsed out of ghostty CLI output.
//!
//! Every record is an immutable value produced fresh per parse. String fields
//! are trimmed; internal whitespace and embedded newlines (in `docs`) are kept.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One documented config key from `+show-config --default --docs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigDocEntry {
    /// Config key (e.g. "font-size")
    pub key: String,
    /// Default value as printed by ghostty
    #[serde(rename = "defaultValue")]
    pub default_value: String,
    /// Documentation text; empty for trailing keys of a grouped doc block
    pub docs: String,
}

/// A raw current-value snapshot from `+show-config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigValue {
    /// Config key
    pub key: String,
    /// Value, not coerced
    pub value: String,
}

/// A font family with its faces from `+list-fonts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FontFamily {
    /// Family name
    pub family: String,
    /// Faces in source order; may be empty
    pub faces: Vec<String>,
}

impl FontFamily {
    /// Start a family with no faces.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            faces: Vec::new(),
        }
    }

    /// Whether any face name contains `needle`, ignoring case.
    pub fn has_face_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.faces
            .iter()
            .any(|face| face.to_lowercase().contains(&needle))
    }
}

/// A theme from `+list-themes --plain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeEntry {
    /// Theme name
    pub name: String,
    /// Where the theme comes from ("resource", "custom", ...)
    pub source: String,
}

/// A bindable action from `+list-actions --docs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionEntry {
    /// Action name
    pub action: String,
    /// Documentation text
    pub docs: String,
}

/// A keybinding from `+list-keybinds --plain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeybindEntry {
    /// Trigger (e.g. "super+shift+,")
    pub keys: String,
    /// Action name
    pub action: String,
    /// Argument after the colon, only when one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl KeybindEntry {
    /// Action with its parameter appended, as ghostty writes it.
    pub fn action_with_params(&self) -> String {
        match &self.params {
            Some(params) => format!("{}:{}", self.action, params),
            None => self.action.clone(),
        }
    }
}

/// A named color from `+list-colors --plain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorEntry {
    /// Color name
    pub name: String,
    /// `#rrggbb`
    pub hex: String,
}

/// Glyph-to-face resolution from `+show-face`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FaceEntry {
    /// `U+XXXX`
    pub codepoint: String,
    /// Rendered glyph
    #[serde(rename = "char")]
    pub character: String,
    /// Face the glyph was found in
    pub face: String,
}
