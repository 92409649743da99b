use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum, builder::BoolishValueParser};
use design_eval_core::Locale;
use design_eval_mcp::server::McpHttpServerConfig;
use thiserror::Error;

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;
const DEFAULT_LOG_FILTER: &str = "info";

/// Transport the MCP server listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "design-eval-mcpd", version, about = "Design-eval MCP prompt server.")]
struct CliArgs {
    #[arg(long, value_enum, env = "DESIGN_EVAL_TRANSPORT", default_value_t = Transport::Stdio)]
    transport: Transport,

    #[arg(long, env = "DESIGN_EVAL_HTTP_ADDR", default_value = DEFAULT_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long,
        env = "DESIGN_EVAL_HTTP_STATEFUL",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,

    #[arg(
        long,
        env = "DESIGN_EVAL_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(
        long,
        env = "DESIGN_EVAL_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,

    #[arg(long, env = "DESIGN_EVAL_PROFILE")]
    profile: Option<PathBuf>,

    #[arg(long, env = "DESIGN_EVAL_LOCALE")]
    locale: Option<Locale>,

    #[arg(long, env = "DESIGN_EVAL_SERVER_NAME")]
    server_name: Option<String>,

    #[arg(long, env = "DESIGN_EVAL_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub transport: Transport,
    pub http: McpHttpServerConfig,
    pub profile_path: Option<PathBuf>,
    pub locale: Option<Locale>,
    pub server_name: Option<String>,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value: {value:?}")]
    InvalidSetting { name: &'static str, value: String },
}

impl DaemonConfig {
    /// Parses CLI arguments, falling back to `DESIGN_EVAL_*` environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a setting is present but unusable.
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for DaemonConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let log_filter = args.log.trim().to_string();
        if log_filter.is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "DESIGN_EVAL_LOG",
                value: args.log,
            });
        }

        let profile_path = args
            .profile
            .filter(|path| !path.as_os_str().is_empty());
        let server_name = args
            .server_name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let http = McpHttpServerConfig::new(args.http_addr)
            .with_stateful_mode(args.http_stateful)
            .with_sse_keep_alive(seconds(args.sse_keep_alive_secs))
            .with_sse_retry(seconds(args.sse_retry_secs));

        Ok(Self {
            transport: args.transport,
            http,
            profile_path,
            locale: args.locale,
            server_name,
            log_filter,
        })
    }
}

/// Zero disables the interval.
fn seconds(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            transport: Transport::Stdio,
            http_addr: DEFAULT_HTTP_ADDR.parse().expect("valid HTTP addr"),
            http_stateful: true,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
            sse_retry_secs: DEFAULT_SSE_RETRY_SECS,
            profile: None,
            locale: None,
            server_name: None,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn defaults_to_stdio_with_builtin_profile() {
        let config = DaemonConfig::try_from(base_args()).expect("config should parse");

        assert_eq!(config.transport, Transport::Stdio);
        assert!(config.profile_path.is_none());
        assert!(config.locale.is_none());
        assert_eq!(config.http.addr.to_string(), DEFAULT_HTTP_ADDR);
        assert_eq!(config.http.sse_keep_alive, Some(Duration::from_secs(15)));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn zero_seconds_disable_sse_intervals() {
        let mut args = base_args();
        args.sse_keep_alive_secs = 0;
        args.sse_retry_secs = 0;

        let config = DaemonConfig::try_from(args).expect("config should parse");

        assert_eq!(config.http.sse_keep_alive, None);
        assert_eq!(config.http.sse_retry, None);
    }

    #[test]
    fn blank_server_name_is_unset() {
        let mut args = base_args();
        args.server_name = Some("   ".to_string());

        let config = DaemonConfig::try_from(args).expect("config should parse");

        assert!(config.server_name.is_none());
    }

    #[test]
    fn blank_log_filter_is_rejected() {
        let mut args = base_args();
        args.log = " ".to_string();

        let err = DaemonConfig::try_from(args).expect_err("blank log filter");
        assert!(err.to_string().contains("DESIGN_EVAL_LOG"));
    }

    #[test]
    fn parses_cli_flags() {
        let args = CliArgs::try_parse_from([
            "design-eval-mcpd",
            "--transport",
            "http",
            "--http-addr",
            "0.0.0.0:8080",
            "--http-stateful",
            "false",
            "--locale",
            "ja",
            "--server-name",
            "payments-eval",
        ])
        .expect("flags should parse");

        let config = DaemonConfig::try_from(args).expect("config should parse");

        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.http.addr.to_string(), "0.0.0.0:8080");
        assert!(!config.http.stateful_mode);
        assert_eq!(config.locale, Some(Locale::Ja));
        assert_eq!(config.server_name.as_deref(), Some("payments-eval"));
    }
}
