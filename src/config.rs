//! cable-joiner configuration (`cable-joiner.toml`).
//!
//! Controls where log lines go and the ranges used when cable lengths or
//! sorted lists are generated at random.
//!
//! ```toml
//! [log]
//! file = "app.log"
//! level = "info"
//!
//! [cables]
//! min_length = 1
//! max_length = 100
//!
//! [lists]
//! min_len = 3
//! max_len = 10
//! min_value = 1
//! max_value = 20
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cable-joiner.toml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level configuration.
///
/// Missing fields use defaults. Missing file → all defaults (no error).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct JoinerConfig {
    /// Log sink settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Random cable length generation.
    #[serde(default)]
    pub cables: CableConfig,

    /// Random sorted list generation.
    #[serde(default)]
    pub lists: ListConfig,
}

// ---------------------------------------------------------------------------
// LogConfig
// ---------------------------------------------------------------------------

/// Where log lines are appended and the default filter level.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Log file, relative to the working directory (default: `app.log`).
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Filter used when `RUST_LOG` is unset (default: `"info"`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("app.log")
}

fn default_log_level() -> String {
    "info".to_owned()
}

// ---------------------------------------------------------------------------
// CableConfig
// ---------------------------------------------------------------------------

/// Inclusive range for randomly generated cable lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CableConfig {
    #[serde(default = "default_min_length")]
    pub min_length: u64,
    #[serde(default = "default_max_length")]
    pub max_length: u64,
}

impl Default for CableConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl CableConfig {
    #[must_use]
    pub const fn length_range(&self) -> RangeInclusive<u64> {
        self.min_length..=self.max_length
    }
}

const fn default_min_length() -> u64 {
    1
}

const fn default_max_length() -> u64 {
    100
}

// ---------------------------------------------------------------------------
// ListConfig
// ---------------------------------------------------------------------------

/// Shape of randomly generated sorted lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// Shortest generated list.
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    /// Longest generated list.
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    /// Smallest generated value.
    #[serde(default = "default_min_value")]
    pub min_value: i64,
    /// Largest generated value.
    #[serde(default = "default_max_value")]
    pub max_value: i64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            max_len: default_max_len(),
            min_value: default_min_value(),
            max_value: default_max_value(),
        }
    }
}

impl ListConfig {
    #[must_use]
    pub const fn len_range(&self) -> RangeInclusive<usize> {
        self.min_len..=self.max_len
    }

    #[must_use]
    pub const fn value_range(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }
}

const fn default_min_len() -> usize {
    3
}

const fn default_max_len() -> usize {
    10
}

const fn default_min_value() -> i64 {
    1
}

const fn default_max_value() -> i64 {
    20
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Error loading a configuration file.
#[derive(Debug)]
pub struct ConfigError {
    /// The path that was being loaded (if available).
    pub path: Option<PathBuf>,
    /// Human-readable message with line-level detail when possible.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = &self.path {
            write!(f, "{}: {}", p.display(), self.message)
        } else {
            write!(f, "config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

impl JoinerConfig {
    /// Load configuration from a TOML file.
    ///
    /// - If the file does not exist, returns all defaults (not an error).
    /// - If the file exists but contains invalid TOML, unknown fields, or
    ///   unusable ranges, returns a [`ConfigError`].
    ///
    /// # Errors
    /// Returns `ConfigError` on I/O errors (other than not-found), parse
    /// errors, or validation errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError {
                    path: Some(path.to_owned()),
                    message: format!("could not read file: {e}"),
                });
            }
        };
        Self::parse(&contents).map_err(|mut e| {
            e.path = Some(path.to_owned());
            e
        })
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ConfigError` on invalid TOML, unknown fields, or bad ranges.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(toml_str).map_err(|e| {
            let mut message = e.message().to_owned();
            if let Some(span) = e.span() {
                let line = toml_str[..span.start]
                    .chars()
                    .filter(|&c| c == '\n')
                    .count()
                    + 1;
                message = format!("line {line}: {message}");
            }
            ConfigError {
                path: None,
                message,
            }
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that every generator range is non-empty and usable.
    ///
    /// # Errors
    /// Returns `ConfigError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |message: String| {
            Err(ConfigError {
                path: None,
                message,
            })
        };
        if self.cables.min_length == 0 {
            return fail("cables.min_length must be at least 1".to_owned());
        }
        if self.cables.min_length > self.cables.max_length {
            return fail(format!(
                "cables.min_length ({}) is greater than cables.max_length ({})",
                self.cables.min_length, self.cables.max_length
            ));
        }
        if self.lists.min_len == 0 {
            return fail("lists.min_len must be at least 1".to_owned());
        }
        if self.lists.min_len > self.lists.max_len {
            return fail(format!(
                "lists.min_len ({}) is greater than lists.max_len ({})",
                self.lists.min_len, self.lists.max_len
            ));
        }
        if self.lists.min_value > self.lists.max_value {
            return fail(format!(
                "lists.min_value ({}) is greater than lists.max_value ({})",
                self.lists.min_value, self.lists.max_value
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
