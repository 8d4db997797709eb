//! # ghostty-mcp-cli
//!
//! Running the ghostty CLI for the Ghostty MCP Server.
//!
//! This crate provides:
//! - The [`CliInvoker`] seam and its process-backed implementation
//! - The version-keyed cache over the full config documentation
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on ghostty-mcp-core and
//! ghostty-mcp-parser, and is the only layer that spawns processes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod exec;

// Re-export commonly used types
pub use cache::DocCache;
pub use exec::{CliInvoker, ExecOutput, GhosttyCli};
