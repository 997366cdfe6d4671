//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and [`Logger`].
//!
//! Components that already instrument with `tracing` macros can route their
//! events into the same diagnostic sink as direct [`Logger`] callers. Event
//! levels map onto the logger's three levels and the event metadata supplies
//! the call site.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use logging::{Logger, init_tracing};
//!
//! init_tracing(Arc::new(Logger::stderr()));
//! tracing::info!("clock manager started");
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::call_site::CallSite;
use super::levels::LogLevel;
use super::logger::Logger;

/// File reported when an event carries no source location.
const UNKNOWN_FILE: &str = "<unknown>";

/// A tracing layer that forwards events to a shared [`Logger`].
pub struct LoggerLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> LoggerLayer<W> {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are forwarded to.
    #[must_use]
    pub fn logger(&self) -> &Arc<Logger<W>> {
        &self.logger
    }

    /// Map a tracing level onto a logger level.
    const fn map_level(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN | Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl<S, W> Layer<S> for LoggerLayer<W>
where
    S: Subscriber,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.finish();

        let site = CallSite::new(
            metadata.line().unwrap_or(0),
            metadata.file().unwrap_or(UNKNOWN_FILE),
            metadata.module_path().unwrap_or_else(|| metadata.target()),
        );

        match level {
            LogLevel::Error => self.logger.error(&message, site, None),
            LogLevel::Info => self.logger.info(&message, site),
            LogLevel::Debug => self.logger.debug(&message, site),
        }
    }
}

/// Visitor that collects the `message` field plus `key=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        if self.message.is_empty() {
            return self.fields.trim_start().to_owned();
        }
        self.message + &self.fields
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Install a global subscriber that forwards every event to `logger`.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use logging::{LogLevel, Logger, init_tracing};
///
/// init_tracing(Arc::new(Logger::with_level(std::io::stderr(), LogLevel::Debug)));
/// tracing::debug!(port = 1, "subscribed");
/// ```
///
/// # Panics
///
/// Panics if a global default subscriber has already been set.
pub fn init_tracing<W>(logger: Arc<Logger<W>>)
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}
