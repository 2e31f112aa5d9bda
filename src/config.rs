//! Runtime configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;
use std::str::FromStr;
use std::time::Duration;

use tracing::Level;

use crate::consts::DEFAULT_SPLIT_DELAY_MS;
use crate::doc::Orientation;
use crate::logging::init_tracing;

pub const SPLIT_DELAY_MS_VAR: &str = "TABLETS_SPLIT_DELAY_MS";
pub const SPLIT_ORIENTATION_VAR: &str = "TABLETS_SPLIT_ORIENTATION";
pub const LOG_LEVEL_VAR: &str = "TABLETS_LOG_LEVEL";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid { key: &'static str, value: String, reason: String },

    /// A variable was set but is not valid unicode.
    #[error("{key} is not valid unicode")]
    NotUnicode { key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How long a tapped split line stays visible before the split fires.
    pub split_delay: Duration,
    /// Orientation of the line a tap produces.
    pub split_orientation: Orientation,
    /// Maximum level for the tracing subscriber.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_delay: Duration::from_millis(DEFAULT_SPLIT_DELAY_MS),
            split_orientation: Orientation::Vertical,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `TABLETS_SPLIT_DELAY_MS`: default 100
    /// - `TABLETS_SPLIT_ORIENTATION`: `vertical` (default) or `horizontal`
    /// - `TABLETS_LOG_LEVEL`: `trace`, `debug`, `info` (default), `warn`, `error`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let defaults = Self::default();
        let delay_ms = parse_var(&lookup, SPLIT_DELAY_MS_VAR, DEFAULT_SPLIT_DELAY_MS)?;
        Ok(Self {
            split_delay: Duration::from_millis(delay_ms),
            split_orientation: parse_var(&lookup, SPLIT_ORIENTATION_VAR, defaults.split_orientation)?,
            log_level: parse_var(&lookup, LOG_LEVEL_VAR, defaults.log_level)?,
        })
    }

    /// Install the fmt subscriber at `log_level`. See [`init_tracing`].
    pub fn init_logging(&self) -> bool {
        init_tracing(self.log_level)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid { key, value: raw.clone(), reason: e.to_string() }),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
    }
}
