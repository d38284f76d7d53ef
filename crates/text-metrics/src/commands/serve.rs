//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use text_metrics_core::config::Config;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; nothing to configure yet.
}

/// Serve MCP requests on stdin/stdout until the client disconnects.
///
/// Logs go to stderr or the log file, never stdout, since stdout carries
/// the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(
        max_input_bytes = ?max_input_bytes,
        mode = %config.syllable_mode,
        "starting MCP server on stdio"
    );

    let server = ProjectServer::with_settings(config.readability_options(), max_input_bytes);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server error")?;

    info!("MCP server stopped");
    Ok(())
}
