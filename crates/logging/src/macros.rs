//! crates/logging/src/macros.rs
//! Emitter macros that capture the call site automatically.
//!
//! Each macro takes the logger first and `format!`-style arguments last. The
//! message is only formatted once the level gate has been passed, except for
//! errors which are always written.

/// Write an error line, optionally followed by a platform error description.
///
/// The second argument is an `Option<OsErrorCode>`.
///
/// # Example
/// ```
/// use logging::{LogLevel, Logger, OsErrorCode, log_error};
///
/// let logger = Logger::with_level(Vec::new(), LogLevel::Error);
/// log_error!(logger, None, "cannot open {}", "/dev/ptp0");
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.starts_with("*** Error: cannot open /dev/ptp0 at line "));
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $code:expr, $($arg:tt)+) => {
        $logger.error(&::std::format!($($arg)+), $crate::call_site!(), $code)
    };
}

/// Write a debug line.
///
/// # Example
/// ```
/// use logging::{LogLevel, Logger, log_debug};
///
/// let logger = Logger::with_level(Vec::new(), LogLevel::Debug);
/// log_debug!(logger, "servo state {}", 2);
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.starts_with("**  Debug: servo state 2 at line "));
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::LogLevel::Debug) {
            logger.debug(&::std::format!($($arg)+), $crate::call_site!());
        }
    }};
}

/// Write an info line.
///
/// # Example
/// ```
/// use logging::{Logger, log_info};
///
/// let logger = Logger::new(Vec::new());
/// log_info!(logger, "subscribed to {} events", 3);
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.starts_with("*   Info: subscribed to 3 events at line "));
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::LogLevel::Info) {
            logger.info(&::std::format!($($arg)+), $crate::call_site!());
        }
    }};
}

/// Dump an octet buffer under an info-style header.
///
/// # Example
/// ```
/// use logging::{LogLevel, Logger, dump_octets};
///
/// let logger = Logger::with_level(Vec::new(), LogLevel::Debug);
/// dump_octets!(logger, &[0xca, 0xfe], "reply from {}", "proxy");
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.ends_with("\n0xca 0xfe\n"));
/// ```
#[macro_export]
macro_rules! dump_octets {
    ($logger:expr, $bytes:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.enabled($crate::LogLevel::Debug) {
            logger.dump_octets(&::std::format!($($arg)+), $bytes, $crate::call_site!());
        }
    }};
}
