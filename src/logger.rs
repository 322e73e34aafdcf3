//! Diagnostic logging for routing decisions.
//!
//! The level comes from three places. `--debug` always wins; otherwise
//! `RUST_LOG` wins when it is set and parses; otherwise the configured
//! `general.log_level` applies. Logs go to stderr so that answers on stdout
//! stay machine readable.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::utils::error::{AppError, AppResult};

/// Directive used when `--debug` is passed
pub const DEBUG_DIRECTIVE: &str = "debug";

/// Where the active filter directive came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSource {
    DebugFlag,
    Environment,
    Config,
}

/// Pick the filter directive for this run
///
/// `env` is the raw `RUST_LOG` value, passed in so the precedence can be
/// checked without touching the process environment.
pub fn select_directive(config: &Config, debug: bool, env: Option<&str>) -> (String, LevelSource) {
    if debug {
        return (DEBUG_DIRECTIVE.to_string(), LevelSource::DebugFlag);
    }

    match env.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) if EnvFilter::try_new(value).is_ok() => {
            (value.to_string(), LevelSource::Environment)
        }
        _ => (config.general.log_level.trim().to_string(), LevelSource::Config),
    }
}

/// Install the global subscriber for the CLI
pub fn init(config: &Config, debug: bool) -> AppResult<LevelSource> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (directive, source) = select_directive(config, debug, env.as_deref());

    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::Logger(format!("invalid log filter '{directive}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    tracing::debug!(%directive, ?source, "logging initialised");
    Ok(source)
}

/// Check a configured level name such as `warn` or `debug`
///
/// The config file takes a bare level, not a full filter directive.
pub fn parse_level(level: &str) -> AppResult<LevelFilter> {
    let level = level.trim();
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
