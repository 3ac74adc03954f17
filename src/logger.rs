//! Leveled logger over a structured sink
//!
//! A `Logger` is an immutable pair of a shared sink and a threshold. Every
//! `with*` call returns a new value; the receiver and its sink lineage stay
//! exactly as they were, so a logger can be handed to any number of threads and
//! specialised locally without coordination.

use crate::log_level::LogLevel;
use crate::log_sink::LogSink;
use chrono::{Local, SecondsFormat};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub const TIME_KEY: &str = "ts";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "message";
pub const METHOD_KEY: &str = "method";

/// Appended to a message whose `Display` impl reported an error mid-format.
pub const FORMAT_ERROR: &str = "%!(FORMAT ERROR)";

#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    level: LogLevel,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>, level: LogLevel) -> Self {
        Self { sink, level }
    }

    /// Wraps an owned sink.
    pub fn from_sink<S: LogSink + 'static>(sink: S, level: LogLevel) -> Self {
        Self::new(Arc::new(sink), level)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The sink this logger writes to, shared with every logger derived by
    /// [`Logger::with_level`].
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// True when a call at `level` passes this logger's threshold.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level.allows(level)
    }

    /// Derives a logger whose records carry `keyvals` after the base fields.
    ///
    /// `keyvals` alternates key and value. Arity is the sink's concern: the
    /// bundled sinks complete a dangling key with `"(MISSING)"`.
    pub fn with<I, V>(&self, keyvals: I) -> Logger
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let keyvals: Vec<Value> = keyvals.into_iter().map(Into::into).collect();
        Logger {
            sink: self.sink.with(&keyvals),
            level: self.level,
        }
    }

    /// Tags every record with `"method": name`.
    pub fn with_method(&self, name: impl Into<String>) -> Logger {
        self.with([Value::from(METHOD_KEY), Value::String(name.into())])
    }

    /// Same sink, different threshold.
    pub fn with_level(&self, level: LogLevel) -> Logger {
        Logger {
            sink: Arc::clone(&self.sink),
            level,
        }
    }

    /// Info-level record with `message` taken verbatim.
    ///
    /// `message` is not a format string: `{}` is written as-is, never
    /// interpolated. Use [`Logger::printf`] or [`Logger::info`] to format.
    pub fn println(&self, message: &str) {
        self.info(format_args!("{message}"));
    }

    /// Alias for [`Logger::info`].
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.info(args);
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Trace, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, args);
    }

    /// Emits one record at `level` if the threshold allows it.
    ///
    /// The message is only rendered after the level check. Sink failures are
    /// dropped here: a logging call never fails its caller.
    pub fn emit(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let record = [
            Value::from(TIME_KEY),
            Value::String(timestamp()),
            Value::from(LEVEL_KEY),
            Value::from(level.as_str()),
            Value::from(MESSAGE_KEY),
            Value::String(format_message(args)),
        ];
        let _ = self.sink.log(&record);
    }
}

/// Current local time as RFC3339 with second precision, `Z` when UTC.
fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Renders `args` without panicking on a misbehaving `Display` impl.
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> String {
    if let Some(message) = args.as_str() {
        return message.to_string();
    }

    let mut message = String::new();
    if fmt::write(&mut message, args).is_err() {
        message.push_str(FORMAT_ERROR);
    }
    message
}
