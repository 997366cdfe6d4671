#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the diagnostic output primitives used across the clkmgr
//! workspace: leveled error/debug/info lines that carry their call site, and a
//! hex dump of binary buffers for protocol debugging. Output goes to any
//! [`std::io::Write`] sink, standard error by default.
//!
//! # Design
//!
//! The crate exposes [`Logger`], which owns a [`LogLevel`] threshold and the
//! sink. The threshold is set when the logger is built (directly, or from a
//! [`LoggerConfig`] read from `CLKMGR_LOG_LEVEL`) and never changes
//! afterwards; components receive a reference to the logger instead of
//! sharing global state. Every emitted line has the shape
//!
//! ```text
//! <prefix><message> at line <line> in <file>:<function>
//! ```
//!
//! where the prefix is `*** Error: `, `**  Debug: ` or `*   Info: `.
//!
//! # Invariants
//!
//! - Error lines are written at every threshold.
//! - Debug lines and octet dumps require [`LogLevel::Debug`]; info lines
//!   require [`LogLevel::Info`] or lower.
//! - Each emission is rendered first and reaches the sink in one
//!   `write_all`, followed by a flush.
//! - Disabled octet dumps perform no formatting work.
//!
//! # Errors
//!
//! Emitters never fail: sink errors are discarded. Parsing a [`LogLevel`]
//! reports [`LogLevelParseError`].
//!
//! # Examples
//!
//! ```
//! use logging::{LogLevel, Logger, OsErrorCode, dump_octets, log_error, log_info};
//!
//! let logger = Logger::with_level(Vec::new(), LogLevel::Debug);
//! log_info!(logger, "proxy connected");
//! dump_octets!(logger, &[0x01, 0x02], "subscribe request");
//! log_error!(logger, OsErrorCode::from_raw(2), "open failed");
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! let lines: Vec<&str> = output.lines().collect();
//! assert!(lines[0].starts_with("*   Info: proxy connected at line "));
//! assert_eq!(lines[2], "0x01 0x02");
//! assert!(lines[3].starts_with("*** Error: open failed "));
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization for [`LogLevel`] and [`LoggerConfig`].
//! - `tracing`: `LoggerLayer`, a `tracing-subscriber` layer that forwards
//!   `tracing` events into a [`Logger`].

mod call_site;
mod config;
mod hexdump;
mod levels;
mod logger;
mod macros;
mod os_error;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::CallSite;
pub use config::{LOG_LEVEL_ENV, LoggerConfig, log_level_env_var};
pub use hexdump::{HEX_VALUES_PER_LINE, render_octets};
pub use levels::{LogLevel, LogLevelParseError};
pub use logger::{DEBUG_PREFIX, ERROR_PREFIX, INFO_PREFIX, Logger, format_line};
pub use os_error::{NO_ERROR_CODE, OsErrorCode};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};

/// Support items for the exported macros.
#[doc(hidden)]
pub mod __private {
    pub use crate::call_site::enclosing_function_name;
}
