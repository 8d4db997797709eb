//! Parser implementations, one module per ghostty output format.

pub mod actions;
pub mod colors;
pub mod config;
pub mod face;
pub mod fonts;
pub mod keybinds;
pub mod themes;

pub use actions::parse_action_list;
pub use colors::parse_color_list;
pub use config::{parse_config_docs, parse_config_values};
pub use face::parse_show_face;
pub use fonts::parse_font_list;
pub use keybinds::parse_keybind_list;
pub use themes::parse_theme_list;
