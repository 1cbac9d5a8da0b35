use std::env;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::domain::editions::{self, DEFAULT_EDITION};
use crate::error::AppError;
use crate::utils::join_code::DEFAULT_CODE_LENGTH;

const MIN_CODE_LENGTH: usize = 4;
const MAX_CODE_LENGTH: usize = 16;
const DEFAULT_LOG_FILTER: &str = "info,actix_web=info";

/// Output format of the process log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable lines for local runs.
    Pretty,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Runtime configuration, read from `KNOWME_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Edition used when a create request names none.
    pub default_edition: String,
    pub code_length: usize,
    /// Idle time after which a session is dropped. `None` disables expiry.
    pub session_ttl: Option<Duration>,
    pub sweep_interval: Duration,
    /// `EnvFilter` directives; `RUST_LOG` still wins when set.
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            default_edition: DEFAULT_EDITION.to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            session_ttl: Some(Duration::from_secs(86_400)),
            sweep_interval: Duration::from_secs(300),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("KNOWME_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = parse_var(&lookup, "KNOWME_PORT")?.unwrap_or(defaults.port);

        let default_edition = match lookup("KNOWME_DEFAULT_EDITION") {
            Some(name) => editions::find(&name)
                .map(|e| e.name.to_string())
                .ok_or_else(|| {
                    AppError::config(format!("KNOWME_DEFAULT_EDITION: unknown edition '{name}'"))
                })?,
            None => defaults.default_edition,
        };

        let code_length =
            parse_var::<usize, _>(&lookup, "KNOWME_CODE_LENGTH")?.unwrap_or(defaults.code_length);
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code_length) {
            return Err(AppError::config(format!(
                "KNOWME_CODE_LENGTH must be between {MIN_CODE_LENGTH} and {MAX_CODE_LENGTH}, got {code_length}"
            )));
        }

        let session_ttl = match parse_var::<u64, _>(&lookup, "KNOWME_SESSION_TTL_SECS")? {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.session_ttl,
        };

        let sweep_interval = match parse_var::<u64, _>(&lookup, "KNOWME_SWEEP_INTERVAL_SECS")? {
            Some(0) => {
                return Err(AppError::config(
                    "KNOWME_SWEEP_INTERVAL_SECS must be greater than zero",
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.sweep_interval,
        };

        let log_filter = match lookup("KNOWME_LOG_FILTER") {
            Some(raw) => {
                let directives = raw.trim().to_string();
                EnvFilter::try_new(&directives).map_err(|e| {
                    AppError::config(format!("KNOWME_LOG_FILTER is not a valid filter: {e}"))
                })?;
                directives
            }
            None => defaults.log_filter,
        };

        let log_format = match lookup("KNOWME_LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "KNOWME_LOG_FORMAT must be 'json' or 'pretty', got '{raw}'"
                ))
            })?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            default_edition,
            code_length,
            session_ttl,
            sweep_interval,
            log_filter,
            log_format,
        })
    }
}

/// Parse an optional variable; present-but-malformed is a config error.
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} has invalid value '{raw}'"))),
    }
}
