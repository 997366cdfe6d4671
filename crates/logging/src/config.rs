//! crates/logging/src/config.rs
//! Logger configuration and the environment override for the threshold.

use std::env;

use super::levels::{LogLevel, LogLevelParseError};

/// Environment variable that selects the [`LogLevel`] threshold.
#[doc(alias = "CLKMGR_LOG_LEVEL")]
pub const LOG_LEVEL_ENV: &str = "CLKMGR_LOG_LEVEL";

/// Returns the environment variable that selects the [`LogLevel`] threshold.
#[must_use]
pub const fn log_level_env_var() -> &'static str {
    LOG_LEVEL_ENV
}

/// Settings used to construct a [`Logger`](crate::Logger).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Threshold for debug and info messages.
    pub level: LogLevel,
}

impl LoggerConfig {
    /// Creates a configuration with an explicit threshold.
    #[must_use]
    pub const fn with_level(level: LogLevel) -> Self {
        Self { level }
    }

    /// Reads [`LOG_LEVEL_ENV`] from the process environment.
    ///
    /// An unset or blank variable yields the default configuration.
    pub fn from_env() -> Result<Self, LogLevelParseError> {
        Ok(Self::level_from_env()?.map_or_else(Self::default, Self::with_level))
    }

    /// Reads [`LOG_LEVEL_ENV`] from the process environment, returning
    /// `None` when the variable is unset or blank.
    ///
    /// Callers that want a fallback other than [`LogLevel::Info`] use this
    /// instead of [`from_env`](Self::from_env).
    pub fn level_from_env() -> Result<Option<LogLevel>, LogLevelParseError> {
        Self::level_from_lookup(|key| env::var(key).ok())
    }

    /// Resolves [`LOG_LEVEL_ENV`] through `lookup` instead of the process
    /// environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{LogLevel, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_lookup(|_| Some("debug".to_owned())).unwrap();
    /// assert_eq!(config.level, LogLevel::Debug);
    ///
    /// let config = LoggerConfig::from_lookup(|_| None).unwrap();
    /// assert_eq!(config, LoggerConfig::default());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LogLevelParseError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Ok(Self::level_from_lookup(lookup)?.map_or_else(Self::default, Self::with_level))
    }

    /// Resolves [`LOG_LEVEL_ENV`] through `lookup`, returning `None` when the
    /// value is missing or blank.
    pub fn level_from_lookup<F>(lookup: F) -> Result<Option<LogLevel>, LogLevelParseError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(LOG_LEVEL_ENV) {
            Some(value) if !value.trim().is_empty() => value.parse().map(Some),
            _ => Ok(None),
        }
    }
}
