//! Error types for the Ghostty MCP Server.

use thiserror::Error;

/// Main error type for Ghostty MCP operations.
///
/// Parsing never produces an error: malformed lines are skipped. Only the
/// CLI-backed layers (the config docs cache and the server) surface failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A ghostty invocation exited non-zero; carries its captured stderr.
    #[error("Failed to {action}: {stderr}")]
    Fetch {
        /// What the invocation was meant to do (e.g. "load config docs")
        action: String,
        /// Captured error stream of the failed invocation
        stderr: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Fetch`] from an action description and captured stderr.
    pub fn fetch(action: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::Fetch {
            action: action.into(),
            stderr: stderr.into(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
