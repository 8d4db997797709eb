//! MCP Tool Parameter Types
//!
//! Argument structs for every ghostty tool. Field docs become the JSON schema
//! descriptions shown to clients.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// =============================================================================
// Version and config documentation
// =============================================================================

/// Parameters for ghostty_version
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct VersionParams {}

/// Parameters for ghostty_search_config_docs
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchConfigDocsParams {
    /// Keyword to search for in config option names and documentation
    pub keyword: String,

    /// Maximum number of results to return (default: 10)
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Parameters for ghostty_get_config_option
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetConfigOptionParams {
    /// The config option key (e.g. 'scrollback-limit', 'font-size')
    pub key: String,
}

// =============================================================================
// Current config
// =============================================================================

/// Parameters for ghostty_show_current_config
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ShowCurrentConfigParams {
    /// If true, show only values that differ from defaults
    #[serde(default)]
    pub changes_only: bool,
}

/// Parameters for ghostty_validate_config
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ValidateConfigParams {
    /// Path to config file to validate (default: user's config)
    #[serde(default)]
    pub config_file: Option<String>,
}

// =============================================================================
// Listings
// =============================================================================

/// Parameters for ghostty_list_fonts
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListFontsParams {
    /// Filter by family name (case-insensitive substring match)
    #[serde(default)]
    pub family: Option<String>,

    /// Only show families with bold faces
    #[serde(default)]
    pub bold: bool,

    /// Only show families with italic faces
    #[serde(default)]
    pub italic: bool,

    /// Filter faces by style name (case-insensitive substring match)
    #[serde(default)]
    pub style: Option<String>,
}

/// Color scheme filter for ghostty_list_themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    /// Dark themes only
    Dark,
    /// Light themes only
    Light,
    /// Every theme
    #[default]
    All,
}

impl ThemeColor {
    /// Value for ghostty's `--color` flag, if any.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            ThemeColor::Dark => Some("dark"),
            ThemeColor::Light => Some("light"),
            ThemeColor::All => None,
        }
    }
}

/// Parameters for ghostty_list_themes
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListThemesParams {
    /// Filter by color scheme (dark/light/all). Default: all
    #[serde(default)]
    pub color: ThemeColor,

    /// Filter themes by name (case-insensitive substring match)
    #[serde(default)]
    pub search: Option<String>,
}

/// Parameters for ghostty_list_actions
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListActionsParams {
    /// Filter actions by name or docs (case-insensitive substring match)
    #[serde(default)]
    pub search: Option<String>,
}

/// Parameters for ghostty_list_keybinds
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListKeybindsParams {
    /// If true, show default keybindings instead of current
    #[serde(default)]
    pub default: bool,

    /// Filter keybinds by keys, action name or parameters (case-insensitive)
    #[serde(default)]
    pub search: Option<String>,
}

/// Parameters for ghostty_list_colors
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListColorsParams {
    /// Filter colors by name (case-insensitive substring match)
    #[serde(default)]
    pub search: Option<String>,
}

// =============================================================================
// Glyph lookup
// =============================================================================

/// Font style for ghostty_show_face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FaceStyle {
    /// Regular weight
    Regular,
    /// Bold
    Bold,
    /// Italic
    Italic,
    /// Bold italic
    BoldItalic,
}

impl FaceStyle {
    /// Value for ghostty's `--style` flag.
    pub fn as_str(self) -> &'static str {
        match self {
            FaceStyle::Regular => "regular",
            FaceStyle::Bold => "bold",
            FaceStyle::Italic => "italic",
            FaceStyle::BoldItalic => "bold_italic",
        }
    }
}

/// Parameters for ghostty_show_face
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ShowFaceParams {
    /// Unicode codepoint to look up (e.g. '0x41' for 'A')
    #[serde(default)]
    pub codepoint: Option<String>,

    /// String to look up each character's rendering face
    #[serde(default)]
    pub string: Option<String>,

    /// Font style to check
    #[serde(default)]
    pub style: Option<FaceStyle>,
}

impl ShowFaceParams {
    /// Command line for `+show-face`, or `None` when neither a codepoint nor
    /// a string was given.
    pub fn to_args(&self) -> Option<Vec<String>> {
        let codepoint = self.codepoint.as_deref().filter(|cp| !cp.is_empty());
        let string = self.string.as_deref().filter(|s| !s.is_empty());
        if codepoint.is_none() && string.is_none() {
            return None;
        }

        let mut args = vec!["+show-face".to_string()];
        if let Some(cp) = codepoint {
            args.push(format!("--cp={cp}"));
        }
        if let Some(s) = string {
            args.push(format!("--string={s}"));
        }
        if let Some(style) = self.style {
            args.push(format!("--style={}", style.as_str()));
        }
        Some(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_default() {
        let params: ListFontsParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.family.is_none());
        assert!(!params.bold);
        assert!(!params.italic);

        let params: ListThemesParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.color, ThemeColor::All);

        let params: VersionParams = serde_json::from_value(json!({})).unwrap();
        let _ = params;
    }

    #[test]
    fn test_search_config_docs_requires_keyword() {
        assert!(serde_json::from_value::<SearchConfigDocsParams>(json!({})).is_err());

        let params: SearchConfigDocsParams =
            serde_json::from_value(json!({"keyword": "font", "max_results": 3})).unwrap();
        assert_eq!(params.max_results, Some(3));
    }

    #[test]
    fn test_theme_color_flag() {
        let params: ListThemesParams = serde_json::from_value(json!({"color": "dark"})).unwrap();
        assert_eq!(params.color.flag(), Some("dark"));
        assert_eq!(ThemeColor::Light.flag(), Some("light"));
        assert_eq!(ThemeColor::All.flag(), None);
        assert!(serde_json::from_value::<ListThemesParams>(json!({"color": "sepia"})).is_err());
    }

    #[test]
    fn test_show_face_args() {
        assert_eq!(ShowFaceParams::default().to_args(), None);

        let params = ShowFaceParams {
            codepoint: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.to_args(), None);

        let params: ShowFaceParams =
            serde_json::from_value(json!({"string": "a→", "style": "bold_italic"})).unwrap();
        assert_eq!(
            params.to_args().unwrap(),
            vec!["+show-face", "--string=a→", "--style=bold_italic"]
        );

        let params = ShowFaceParams {
            codepoint: Some("0x41".to_string()),
            ..Default::default()
        };
        assert_eq!(params.to_args().unwrap(), vec!["+show-face", "--cp=0x41"]);
    }
}
