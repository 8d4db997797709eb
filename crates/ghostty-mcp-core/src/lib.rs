//! # ghostty-mcp-core
//!
//! Core types for the Ghostty MCP Server.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other ghostty-mcp crates. It provides:
//!
//! - Record types produced by the CLI output parsers
//! - Error types
//! - Server configuration loaded from YAML
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other ghostty-mcp crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod record;

// Re-export commonly used types
pub use config::{GhosttySettings, SearchSettings, ServerConfig, ServerSettings};
pub use error::{Error, Result};
pub use record::{
    ActionEntry, ColorEntry, ConfigDocEntry, ConfigValue, FaceEntry, FontFamily, KeybindEntry,
    ThemeEntry,
};
