//! Configuration types for Ghostty MCP Server.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::Error;

/// Server configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Server settings
    pub server: ServerSettings,
    /// How to run the ghostty CLI
    pub ghostty: GhosttySettings,
    /// Search defaults for the config docs tools
    pub search: SearchSettings,
}

impl ServerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ServerConfig = serde_yaml::from_str(yaml)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.transport != "stdio" {
            return Err(Error::Config(format!(
                "unsupported transport '{}' (only stdio is available)",
                self.server.transport
            )));
        }

        if self.ghostty.binary.trim().is_empty() {
            return Err(Error::Config("ghostty.binary cannot be empty".to_string()));
        }

        let timeouts = [
            ("ghostty.timeout_ms", self.ghostty.timeout_ms),
            (
                "ghostty.show_config_timeout_ms",
                self.ghostty.show_config_timeout_ms,
            ),
            ("ghostty.docs_timeout_ms", self.ghostty.docs_timeout_ms),
        ];
        for (name, value) in timeouts {
            if value == 0 {
                return Err(Error::Config(format!("{name} must be > 0")));
            }
        }

        if self.search.default_max_results == 0 {
            return Err(Error::Config(
                "search.default_max_results must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Transport type (only stdio is supported)
    pub transport: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            transport: "stdio".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Settings for invoking the ghostty binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhosttySettings {
    /// Binary name or path
    pub binary: String,
    /// Timeout for ordinary invocations in milliseconds
    pub timeout_ms: u64,
    /// Timeout for `+show-config` in milliseconds
    pub show_config_timeout_ms: u64,
    /// Timeout for `+show-config --default --docs` in milliseconds
    pub docs_timeout_ms: u64,
}

impl Default for GhosttySettings {
    fn default() -> Self {
        Self {
            binary: "ghostty".to_string(),
            timeout_ms: 10_000,
            show_config_timeout_ms: 15_000,
            docs_timeout_ms: 30_000,
        }
    }
}

impl GhosttySettings {
    /// Timeout for ordinary invocations.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Timeout for the current-config dump.
    pub fn show_config_timeout(&self) -> Duration {
        Duration::from_millis(self.show_config_timeout_ms)
    }

    /// Timeout for the full documentation dump.
    pub fn docs_timeout(&self) -> Duration {
        Duration::from_millis(self.docs_timeout_ms)
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Results returned by a docs search when the caller gives no limit
    pub default_max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_max_results: 10,
        }
    }
}
