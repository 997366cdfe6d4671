//! crates/logging/src/logger.rs
//! Leveled emitters and the octet dump writer.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::call_site::CallSite;
use crate::config::LoggerConfig;
use crate::hexdump::render_octets;
use crate::levels::LogLevel;
use crate::os_error::OsErrorCode;

/// Line prefix for error messages.
pub const ERROR_PREFIX: &str = "*** Error: ";
/// Line prefix for debug messages.
pub const DEBUG_PREFIX: &str = "**  Debug: ";
/// Line prefix for info messages and octet dump headers.
pub const INFO_PREFIX: &str = "*   Info: ";

/// Appends `<prefix><message> at line <line> in <file>:<function>\n` to `out`.
///
/// This is the shape shared by every emitter; error lines insert the platform
/// description into `message` before calling it.
pub fn format_line(prefix: &str, message: &str, site: &CallSite, out: &mut String) {
    use fmt::Write as _;

    out.push_str(prefix);
    out.push_str(message);
    out.push(' ');
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{site}");
}

/// Leveled diagnostic writer.
///
/// A `Logger` owns its threshold and its sink. The threshold is fixed at
/// construction; components that need diagnostics receive a `&Logger` (or an
/// `Arc<Logger<_>>`) instead of consulting global state. Each emission is
/// rendered into a local buffer, written to the sink with a single
/// `write_all`, and flushed before the call returns. Sink failures are
/// swallowed because the logger is the reporting channel of last resort.
///
/// # Examples
///
/// Collect diagnostics in memory:
///
/// ```
/// use logging::{CallSite, LogLevel, Logger};
///
/// let logger = Logger::with_level(Vec::new(), LogLevel::Debug);
/// let site = CallSite::new(7, "src/ptp.rs", "sync");
///
/// logger.info("clock locked", site);
/// logger.dump_octets("frame", &[0x00, 0x0a, 0xff], site);
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "*   Info: clock locked at line 7 in src/ptp.rs:sync\n\
///      *   Info: frame at line 7 in src/ptp.rs:sync\n\
///      0x00 0x0a 0xff\n"
/// );
/// ```
///
/// Errors are written at every threshold:
///
/// ```
/// use logging::{CallSite, LogLevel, Logger};
///
/// let logger = Logger::with_level(Vec::new(), LogLevel::Error);
/// let site = CallSite::new(12, "src/proxy.rs", "connect");
///
/// logger.info("suppressed", site);
/// logger.error("connect failed", site, None);
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert_eq!(output, "*** Error: connect failed at line 12 in src/proxy.rs:connect\n");
/// ```
pub struct Logger<W> {
    level: LogLevel,
    sink: Mutex<W>,
}

impl<W> Logger<W> {
    /// Creates a logger with the default [`LogLevel::Info`] threshold.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_level(writer, LogLevel::default())
    }

    /// Creates a logger with an explicit threshold.
    #[must_use]
    pub fn with_level(writer: W, level: LogLevel) -> Self {
        Self {
            level,
            sink: Mutex::new(writer),
        }
    }

    /// Creates a logger from a [`LoggerConfig`].
    #[must_use]
    pub fn from_config(writer: W, config: &LoggerConfig) -> Self {
        Self::with_level(writer, config.level)
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Reports whether a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level)
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger<io::Stderr> {
    /// Creates a logger that writes to standard error at the default threshold.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for Logger<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Writes an error line, regardless of the threshold.
    ///
    /// When `code` is present its platform description follows the message:
    /// `*** Error: <message> <description> at line ...`. Without a code the
    /// message is followed directly by the location suffix.
    pub fn error(&self, message: &str, site: CallSite, code: Option<OsErrorCode>) {
        let mut line = String::with_capacity(ERROR_PREFIX.len() + message.len() + 64);
        match code {
            Some(code) => {
                let described = format!("{message} {}", code.describe());
                format_line(ERROR_PREFIX, &described, &site, &mut line);
            }
            None => format_line(ERROR_PREFIX, message, &site, &mut line),
        }
        self.emit(&line);
    }

    /// Writes a debug line when the threshold is [`LogLevel::Debug`].
    pub fn debug(&self, message: &str, site: CallSite) {
        self.leveled(LogLevel::Debug, DEBUG_PREFIX, message, site);
    }

    /// Writes an info line when the threshold is at most [`LogLevel::Info`].
    pub fn info(&self, message: &str, site: CallSite) {
        self.leveled(LogLevel::Info, INFO_PREFIX, message, site);
    }

    /// Writes an info-style header followed by the hexadecimal body of
    /// `bytes`.
    ///
    /// The dump is gated like [`debug`](Self::debug): below that verbosity the
    /// call returns before rendering anything. Header and body reach the sink
    /// in one write so concurrent emissions cannot split the dump.
    pub fn dump_octets(&self, message: &str, bytes: &[u8], site: CallSite) {
        if !self.enabled(LogLevel::Debug) {
            return;
        }
        let mut output =
            String::with_capacity(INFO_PREFIX.len() + message.len() + bytes.len() * 5 + 64);
        format_line(INFO_PREFIX, message, &site, &mut output);
        render_octets(bytes, &mut output);
        self.emit(&output);
    }

    fn leveled(&self, level: LogLevel, prefix: &str, message: &str, site: CallSite) {
        if !self.enabled(level) {
            return;
        }
        let mut line = String::with_capacity(prefix.len() + message.len() + 64);
        format_line(prefix, message, &site, &mut line);
        self.emit(&line);
    }

    fn emit(&self, text: &str) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        // Nowhere left to report a failing diagnostic sink.
        let _ = sink.write_all(text.as_bytes());
        let _ = sink.flush();
    }
}
