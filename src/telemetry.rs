//! Tracing subscriber bootstrap.
//!
//! The filter comes from `TASKTRACK_LOG` when set and valid, otherwise from
//! [`TelemetryConfig::default_filter`].

use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*, util::TryInitError};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "TASKTRACK_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "TASKTRACK_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per event, without ANSI colours.
    Json,
}

impl LogFormat {
    /// Parses a format name; anything other than `json` is compact.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Event formatter.
    pub format: LogFormat,
    /// Directives used when `TASKTRACK_LOG` is unset or invalid.
    pub default_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            default_filter: "tasktrack=info,warn".to_owned(),
        }
    }
}

impl TelemetryConfig {
    /// Reads the format from `TASKTRACK_LOG_FORMAT`, keeping the default
    /// filter.
    #[must_use]
    pub fn from_env() -> Self {
        let format = env::var(LOG_FORMAT_ENV)
            .map(|name| LogFormat::from_name(&name))
            .unwrap_or_default();
        Self {
            format,
            ..Self::default()
        }
    }

    /// Builds the event filter.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Filter`] when the fallback directives do not
    /// parse.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.default_filter)?),
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives are invalid.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for unparsable directives and
/// [`TelemetryError::AlreadyInstalled`] when called more than once.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_ansi(false))
            .try_init()?,
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
    }
    Ok(())
}
