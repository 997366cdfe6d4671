//! crates/logging/src/levels.rs
//! Severity levels and the threshold ordering used by the logger gate.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a diagnostic message.
///
/// Levels are totally ordered `Debug < Info < Error`. A
/// [`Logger`](crate::Logger) configured with a threshold emits debug and info
/// messages whose level is at or above that threshold. Error messages bypass
/// the threshold entirely.
///
/// # Examples
///
/// ```
/// use logging::LogLevel;
///
/// assert!(LogLevel::Debug < LogLevel::Info);
/// assert_eq!("ERROR".parse::<LogLevel>(), Ok(LogLevel::Error));
/// assert_eq!(LogLevel::default(), LogLevel::Info);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Most verbose setting; enables debug lines and octet dumps.
    Debug,
    /// Informational messages. This is the default threshold.
    #[default]
    Info,
    /// Failures. Always emitted regardless of threshold.
    Error,
}

impl LogLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Debug, Self::Info, Self::Error];

    /// Returns the lower-case label used by [`Display`](fmt::Display) and
    /// accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// Reports whether a message at `self` passes a gate set to `threshold`.
    ///
    /// Errors always pass.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self == Self::Error || self >= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`LogLevel`] from unrecognised text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level '{input}'; expected debug, info or error")]
pub struct LogLevelParseError {
    input: String,
}

impl LogLevelParseError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LogLevel {
    type Err = LogLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let level = if trimmed.eq_ignore_ascii_case("debug") || trimmed.eq_ignore_ascii_case("dbg")
        {
            Self::Debug
        } else if trimmed.eq_ignore_ascii_case("info") {
            Self::Info
        } else if trimmed.eq_ignore_ascii_case("error") || trimmed.eq_ignore_ascii_case("err") {
            Self::Error
        } else {
            return Err(LogLevelParseError {
                input: s.to_owned(),
            });
        };
        Ok(level)
    }
}
