//! Ghostty MCP Server Library
//!
//! This library contains the MCP protocol layer, the tool parameter types and
//! the query layer that filters and renders parsed ghostty output.
//! The actual server binary is in main.rs.

pub mod protocol;
pub mod query;
pub mod tools;

// Re-export commonly used types
pub use protocol::GhosttyMcpServer;
pub use tools::*;
