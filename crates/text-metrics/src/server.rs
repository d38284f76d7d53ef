//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the readability engine over stdio so AI assistants can score text
//! without shelling out to the CLI.
//!
//! Each `#[tool]` method delegates to `text-metrics-core`; the server only
//! enforces the input limit, applies configured defaults and serializes
//! results.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use text_metrics_core::readability::{
    self, ReadabilityOptions, SyllableMode, check_input_size, syllable_breakdown,
};
use text_metrics_core::text::{count_sentences, count_words};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `flesch_kincaid` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FleschKincaidParams {
    /// The text to score.
    pub text: String,
    /// Syllable mode: "whole-text" or "per-word". Defaults to the configured mode.
    pub mode: Option<SyllableMode>,
    /// Maximum acceptable Flesch-Kincaid grade level.
    pub max_grade: Option<f64>,
    /// Minimum acceptable Flesch reading ease.
    pub min_ease: Option<f64>,
}

/// Parameters for the `count_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountTextParams {
    /// The text to count.
    pub text: String,
    /// Syllable mode: "whole-text" or "per-word". Defaults to the configured mode.
    pub mode: Option<SyllableMode>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Whitespace-separated words to estimate individually.
    pub text: String,
}

/// MCP server exposing the readability engine to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    defaults: ReadabilityOptions,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with built-in defaults and the default input limit.
    pub fn new() -> Self {
        Self::with_settings(
            ReadabilityOptions::default(),
            Some(text_metrics_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }

    /// Create a server using configured defaults. `None` disables the input limit.
    pub fn with_settings(defaults: ReadabilityOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            defaults,
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text.len(), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    fn mode_or_default(&self, mode: Option<SyllableMode>) -> SyllableMode {
        mode.unwrap_or(self.defaults.mode)
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text with Flesch reading ease and Flesch-Kincaid grade level.
    #[tool(
        description = "Score readability of text. Returns Flesch reading ease, Flesch-Kincaid grade level, word/sentence/syllable counts and threshold results."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn flesch_kincaid(
        &self,
        Parameters(params): Parameters<FleschKincaidParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "flesch_kincaid", mode = ?params.mode, "executing MCP tool");
        self.check_size(&params.text)?;

        let options = ReadabilityOptions {
            mode: self.mode_or_default(params.mode),
            max_grade: params.max_grade.or(self.defaults.max_grade),
            min_ease: params.min_ease.or(self.defaults.min_ease),
        };

        let report = readability::check_readability(&params.text, &options)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "flesch_kincaid",
            grade = report.metrics.grade_level,
            ease = report.metrics.reading_ease,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Count words, sentences and syllables.
    #[tool(
        description = "Count words, sentence boundaries, and estimated syllables in text. Works on any input, including text without punctuation."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_text(
        &self,
        Parameters(params): Parameters<CountTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_text", mode = ?params.mode, "executing MCP tool");
        self.check_size(&params.text)?;

        let mode = self.mode_or_default(params.mode);
        let counts = serde_json::json!({
            "words": count_words(&params.text),
            "sentences": count_sentences(&params.text),
            "syllables": readability::count_syllables(&params.text, mode),
            "mode": mode,
        });

        let json = serde_json::to_string_pretty(&counts)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "count_text", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Per-word syllable estimates.
    #[tool(description = "Estimate syllables for each whitespace-separated word in text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_syllables", "executing MCP tool");
        self.check_size(&params.text)?;

        let breakdown = syllable_breakdown(&params.text);
        let json = serde_json::to_string_pretty(&breakdown)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "count_syllables",
            words = breakdown.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use flesch_kincaid to score English text, count_text for raw counts, and count_syllables for per-word estimates.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
