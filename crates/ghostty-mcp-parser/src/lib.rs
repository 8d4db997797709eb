//! # ghostty-mcp-parser
//!
//! Output parsers for the ghostty CLI introspection commands.
//!
//! This crate provides one pure function per output format:
//! - `+show-config --default --docs` → [`parse_config_docs`]
//! - `+show-config` → [`parse_config_values`]
//! - `+list-fonts` → [`parse_font_list`]
//! - `+list-themes --plain` → [`parse_theme_list`]
//! - `+list-actions --docs` → [`parse_action_list`]
//! - `+list-keybinds --plain` → [`parse_keybind_list`]
//! - `+list-colors --plain` → [`parse_color_list`]
//! - `+show-face` → [`parse_show_face`]
//!
//! Parsing is best effort: a line that does not fit its format is skipped and
//! the remaining lines are still parsed. No parser can fail.
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on ghostty-mcp-core
//! and performs no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lines;
pub mod parsers;

// Re-export commonly used functions
pub use lines::lines;
pub use parsers::{
    parse_action_list, parse_color_list, parse_config_docs, parse_config_values,
    parse_font_list, parse_keybind_list, parse_show_face, parse_theme_list,
};
