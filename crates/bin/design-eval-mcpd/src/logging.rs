use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to stderr without ANSI colors,
/// since stdout is reserved for MCP frames in stdio mode.
pub fn init(filter: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()?;
    Ok(())
}
