//! Tunable limits for listing, paging, and suggestions.

use serde::Deserialize;
use thiserror::Error;

/// Configuration for query services.
///
/// # Examples
///
/// ```
/// use tasktrack::config::TaskConfig;
///
/// let config = TaskConfig::default();
/// assert_eq!(config.default_page_size, 10);
///
/// let parsed = TaskConfig::from_json_str(r#"{"max_page_size": 50}"#)?;
/// assert_eq!(parsed.max_page_size, 50);
/// assert_eq!(parsed.suggestion_limit, 10);
/// # Ok::<(), tasktrack::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Page size used when a listing omits or garbles `limit`.
    pub default_page_size: u64,
    /// Largest page size a listing may request.
    pub max_page_size: u64,
    /// Maximum number of suggestions returned for a prefix query.
    pub suggestion_limit: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
            suggestion_limit: 10,
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid task configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size field was zero.
    #[error("task configuration field `{0}` must be at least 1")]
    ZeroSize(&'static str),

    /// The default page size exceeds the maximum.
    #[error("default page size {default} exceeds maximum {max}")]
    DefaultAboveMax {
        /// Configured default page size.
        default: u64,
        /// Configured maximum page size.
        max: u64,
    },
}

impl TaskConfig {
    /// Creates a configuration with small pages, for constrained callers.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 25,
            suggestion_limit: 5,
        }
    }

    /// Creates a configuration with larger pages and more suggestions.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: 250,
            suggestion_limit: 20,
        }
    }

    /// Parses a JSON document, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or the values
    /// are inconsistent.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] for zero-valued sizes and
    /// [`ConfigError::DefaultAboveMax`] when the default page size exceeds
    /// the maximum.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ZeroSize("default_page_size"));
        }
        if self.max_page_size == 0 {
            return Err(ConfigError::ZeroSize("max_page_size"));
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::ZeroSize("suggestion_limit"));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::DefaultAboveMax {
                default: self.default_page_size,
                max: self.max_page_size,
            });
        }
        Ok(())
    }
}
