//! # Ghostty MCP Server
//!
//! Model Context Protocol server that lets AI agents query the Ghostty
//! terminal emulator through its command-line interface.
//!
//! ## Overview
//!
//! This server provides MCP tools for:
//! - Config documentation (search, single-option lookup)
//! - Current configuration (dump, validation)
//! - Fonts, themes, actions, keybindings and named colors
//! - Glyph-to-face resolution
//!
//! ## Architecture
//!
//! This is Layer 3 - the main MCP server binary that ties together:
//! - ghostty-mcp-core: Records, errors, configuration
//! - ghostty-mcp-parser: CLI output parsers
//! - ghostty-mcp-cli: ghostty invocation and the config docs cache

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use ghostty_mcp::GhosttyMcpServer;
use ghostty_mcp_core::ServerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ghostty-mcp",
    version,
    about = "MCP server for querying Ghostty's configuration, fonts, themes and keybindings"
)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    /// ghostty binary name or path
    #[arg(long)]
    ghostty: Option<String>,
}

fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(level) = &cli.log_level {
        config.server.log_level = level.clone();
    }
    if let Some(binary) = &cli.ghostty {
        config.ghostty.binary = binary.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Initialize logging. stdout carries the MCP transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "Ghostty MCP Server v{} starting (ghostty binary: {})...",
        env!("CARGO_PKG_VERSION"),
        config.ghostty.binary
    );

    let server = GhosttyMcpServer::with_config(&config);

    tracing::info!("Server initialized, starting stdio transport...");

    // Serve the MCP server over stdio
    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Error starting server: {}", e);
        e
    })?;

    tracing::info!("Ghostty MCP Server running on stdio");

    // Wait for the service to complete
    service.waiting().await?;

    tracing::info!("Ghostty MCP Server shutting down");

    Ok(())
}
