//! Ghostty MCP Server Implementation
//!
//! This module implements the MCP server using rmcp 0.9's #[tool_router] pattern.
//! Each tool runs the ghostty CLI, parses its output and renders the filtered
//! records as text.

use std::sync::Arc;
use std::time::Duration;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use tracing::{debug, error, instrument};

use ghostty_mcp_cli::{CliInvoker, DocCache, ExecOutput, GhosttyCli};
use ghostty_mcp_core::{GhosttySettings, SearchSettings, ServerConfig};
use ghostty_mcp_parser::{
    parse_action_list, parse_color_list, parse_config_values, parse_font_list,
    parse_keybind_list, parse_show_face, parse_theme_list,
};

use crate::query::{self, FontFilter};
use crate::tools::*;

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn error_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

/// Error result for a ghostty invocation that exited non-zero.
fn cli_failure(output: &ExecOutput) -> CallToolResult {
    error_result(format!("Error: {}", output.stderr))
}

/// Rendered text, or `empty` when nothing survived filtering.
fn render_or<T>(items: &[T], empty: &str, render: fn(&[T]) -> String) -> CallToolResult {
    if items.is_empty() {
        text_result(empty)
    } else {
        text_result(render(items))
    }
}

/// Ghostty MCP Server
///
/// Exposes ghostty's introspection commands as MCP tools.
#[derive(Clone)]
pub struct GhosttyMcpServer {
    /// Runs the ghostty binary
    cli: Arc<GhosttyCli>,
    /// Version-keyed config documentation
    docs: Arc<DocCache<GhosttyCli>>,
    /// Binary and timeouts
    ghostty: GhosttySettings,
    /// Search defaults
    search: SearchSettings,
    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GhosttyMcpServer {
    /// Create a server with default settings
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default())
    }

    /// Create a server from a loaded configuration
    pub fn with_config(config: &ServerConfig) -> Self {
        let cli = Arc::new(GhosttyCli::new(config.ghostty.binary.clone()));
        let docs = DocCache::new(Arc::clone(&cli))
            .with_timeouts(config.ghostty.timeout(), config.ghostty.docs_timeout());

        Self {
            cli,
            docs: Arc::new(docs),
            ghostty: config.ghostty.clone(),
            search: config.search.clone(),
            tool_router: Self::tool_router(),
        }
    }

    /// Run ghostty with the ordinary timeout
    async fn run(&self, args: Vec<String>) -> ExecOutput {
        self.run_with_timeout(args, self.ghostty.timeout()).await
    }

    async fn run_with_timeout(&self, args: Vec<String>, timeout: Duration) -> ExecOutput {
        let output = self.cli.invoke(args, timeout).await;
        if !output.success() {
            error!(
                "ghostty exited with {}: {}",
                output.exit_code,
                output.stderr.trim()
            );
        }
        output
    }

    #[tool(description = "Show the installed Ghostty version and build info")]
    #[instrument(skip_all)]
    async fn ghostty_version(
        &self,
        Parameters(_params): Parameters<VersionParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.run(args(&["--version"])).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }
        Ok(text_result(output.stdout.trim()))
    }

    #[tool(
        description = "Search Ghostty configuration documentation by keyword. Returns matching config options with their docs and default values."
    )]
    #[instrument(skip_all)]
    async fn ghostty_search_config_docs(
        &self,
        Parameters(params): Parameters<SearchConfigDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        let entries = match self.docs.get().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Config docs unavailable: {}", e);
                return Ok(error_result(e.to_string()));
            }
        };

        let limit = params
            .max_results
            .unwrap_or(self.search.default_max_results);
        let matches = query::search_config_docs(&entries, &params.keyword, limit);
        debug!(
            "'{}' matched {} of {} config options",
            params.keyword,
            matches.len(),
            entries.len()
        );

        if matches.is_empty() {
            return Ok(text_result(format!(
                "No config options found matching \"{}\".",
                params.keyword
            )));
        }
        Ok(text_result(query::render_config_docs(&matches)))
    }

    #[tool(
        description = "Get full documentation for a specific Ghostty config option. Supports fuzzy matching if exact key is not found."
    )]
    #[instrument(skip_all)]
    async fn ghostty_get_config_option(
        &self,
        Parameters(params): Parameters<GetConfigOptionParams>,
    ) -> Result<CallToolResult, McpError> {
        let entries = match self.docs.get().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Config docs unavailable: {}", e);
                return Ok(error_result(e.to_string()));
            }
        };

        let lookup = query::lookup_config_option(&entries, &params.key);
        Ok(text_result(query::render_option_lookup(&params.key, &lookup)))
    }

    #[tool(
        description = "Show the currently active Ghostty configuration. Use changes_only=true to see only user-modified values."
    )]
    #[instrument(skip_all)]
    async fn ghostty_show_current_config(
        &self,
        Parameters(params): Parameters<ShowCurrentConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut cli_args = args(&["+show-config"]);
        if params.changes_only {
            cli_args.push("--changes-only".to_string());
        }

        let output = self
            .run_with_timeout(cli_args, self.ghostty.show_config_timeout())
            .await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let values = parse_config_values(&output.stdout);
        let empty = if params.changes_only {
            "No configuration changes from defaults."
        } else {
            "No configuration values found."
        };
        Ok(render_or(&values, empty, query::render_config_values))
    }

    #[tool(
        description = "Validate a Ghostty config file for syntax errors. Without arguments, validates the default config."
    )]
    #[instrument(skip_all)]
    async fn ghostty_validate_config(
        &self,
        Parameters(params): Parameters<ValidateConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut cli_args = args(&["+validate-config"]);
        if let Some(path) = params.config_file.filter(|p| !p.is_empty()) {
            cli_args.push(format!("--config-file={path}"));
        }

        let output = self.run(cli_args).await;
        if !output.success() {
            let details = format!("{}\n{}", output.stderr, output.stdout);
            let details = match details.trim() {
                "" => format!("Unknown error (exit code {})", output.exit_code),
                trimmed => trimmed.to_string(),
            };
            return Ok(error_result(format!(
                "Config validation failed:\n\n{details}"
            )));
        }

        let report = format!("{}\n{}", output.stdout, output.stderr);
        Ok(match report.trim() {
            "" => text_result("Config is valid. No errors found."),
            trimmed => text_result(trimmed),
        })
    }

    #[tool(description = "List available font families and their faces")]
    #[instrument(skip_all)]
    async fn ghostty_list_fonts(
        &self,
        Parameters(params): Parameters<ListFontsParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.run(args(&["+list-fonts"])).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let filter = FontFilter {
            family: params.family,
            bold: params.bold,
            italic: params.italic,
            style: params.style,
        };
        let families = query::filter_fonts(parse_font_list(&output.stdout), &filter);
        Ok(render_or(
            &families,
            "No fonts found matching the criteria.",
            query::render_fonts,
        ))
    }

    #[tool(description = "List available Ghostty themes")]
    #[instrument(skip_all)]
    async fn ghostty_list_themes(
        &self,
        Parameters(params): Parameters<ListThemesParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut cli_args = args(&["+list-themes", "--plain"]);
        if let Some(color) = params.color.flag() {
            cli_args.push(format!("--color={color}"));
        }

        let output = self.run(cli_args).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let themes = query::filter_themes(
            parse_theme_list(&output.stdout),
            params.search.as_deref(),
        );
        Ok(render_or(
            &themes,
            "No themes found matching the criteria.",
            query::render_themes,
        ))
    }

    #[tool(description = "List actions that can be bound to keybindings in Ghostty")]
    #[instrument(skip_all)]
    async fn ghostty_list_actions(
        &self,
        Parameters(params): Parameters<ListActionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.run(args(&["+list-actions", "--docs"])).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let actions = query::filter_actions(
            parse_action_list(&output.stdout),
            params.search.as_deref(),
        );
        Ok(render_or(
            &actions,
            "No actions found matching the search.",
            query::render_actions,
        ))
    }

    #[tool(description = "List current keybindings in Ghostty")]
    #[instrument(skip_all)]
    async fn ghostty_list_keybinds(
        &self,
        Parameters(params): Parameters<ListKeybindsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut cli_args = args(&["+list-keybinds", "--plain"]);
        if params.default {
            cli_args.push("--default".to_string());
        }

        let output = self.run(cli_args).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let keybinds = query::filter_keybinds(
            parse_keybind_list(&output.stdout),
            params.search.as_deref(),
        );
        Ok(render_or(
            &keybinds,
            "No keybindings found matching the search.",
            query::render_keybinds,
        ))
    }

    #[tool(description = "List named colors available in Ghostty")]
    #[instrument(skip_all)]
    async fn ghostty_list_colors(
        &self,
        Parameters(params): Parameters<ListColorsParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.run(args(&["+list-colors", "--plain"])).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let colors = query::filter_colors(
            parse_color_list(&output.stdout),
            params.search.as_deref(),
        );
        Ok(render_or(
            &colors,
            "No colors found matching the search.",
            query::render_colors,
        ))
    }

    #[tool(description = "Show which font face Ghostty uses to render specific characters")]
    #[instrument(skip_all)]
    async fn ghostty_show_face(
        &self,
        Parameters(params): Parameters<ShowFaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let cli_args = params.to_args().ok_or_else(|| {
            McpError::new(
                ErrorCode(-32602), // Invalid params
                "Please provide either a codepoint (--cp) or a string (--string).",
                None,
            )
        })?;

        let output = self.run(cli_args).await;
        if !output.success() {
            return Ok(cli_failure(&output));
        }

        let faces = parse_show_face(&output.stdout);
        if faces.is_empty() {
            return Ok(match output.stdout.trim() {
                "" => text_result("No face information returned."),
                raw => text_result(raw),
            });
        }
        Ok(text_result(query::render_faces(&faces)))
    }
}

fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

impl Default for GhosttyMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler]
impl rmcp::ServerHandler for GhosttyMcpServer {
    fn get_info(&self) -> ServerInfo {
        debug!("Describing ghostty-mcp (binary: {})", self.cli.binary());
        ServerInfo {
            instructions: Some(
                "Ghostty MCP Server - Query the Ghostty terminal's configuration documentation, \
                 current settings, fonts, themes, actions, keybindings, named colors and glyph \
                 faces. Use ghostty_search_config_docs or ghostty_get_config_option to look up \
                 config options, and the ghostty_list_* tools to browse everything else."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
