//! Daemon entry point for the design-eval MCP prompt server.
//!
//! Loads configuration from CLI arguments and the environment, resolves the
//! prompt profile, and serves the MCP protocol over stdio or streamable HTTP.

mod config;
mod logging;
mod profile;

use std::sync::Arc;

use design_eval_mcp::server::{serve_stdio, serve_streamable_http};
use tracing::info;

use crate::config::{DaemonConfig, Transport};
use crate::profile::build_renderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = DaemonConfig::from_args()?;
    logging::init(&config.log_filter)?;

    let renderer = Arc::new(build_renderer(&config)?);
    info!(transport = ?config.transport, "starting design-eval-mcpd");

    match config.transport {
        Transport::Stdio => serve_stdio(renderer).await,
        Transport::Http => serve_streamable_http(renderer, config.http).await,
    }
}
