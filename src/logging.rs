// src/logging.rs

//! Stderr logging for `shopflow`.
//!
//! The filter comes from `--log-level` when given, otherwise from
//! `SHOPFLOW_LOG` (full `EnvFilter` syntax, e.g. `shopflow::engine=debug`),
//! otherwise `info`. STDOUT is reserved for JSON results.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable read when no level is passed on the command line.
pub const LOG_ENV: &str = "SHOPFLOW_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    fmt()
        .with_env_filter(env_filter(cli_level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

/// Filter for `cli_level`, falling back to [`LOG_ENV`] and then `info`.
///
/// An unparseable `SHOPFLOW_LOG` is ignored rather than fatal.
pub fn env_filter(cli_level: Option<LogLevel>) -> EnvFilter {
    let directive = directive_for(cli_level, std::env::var(LOG_ENV).ok());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn directive_for(cli_level: Option<LogLevel>, env: Option<String>) -> String {
    if let Some(level) = cli_level {
        return level_directive(level).to_string();
    }
    match env {
        Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
